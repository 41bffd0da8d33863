use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playurmood::{
    actions::Action,
    cli, config,
    request::{DEFAULT_PLAYLIST_SIZE, PlaylistForm},
    types::PkceToken,
    utils,
    voice::RepeatState,
    warning,
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Create a playlist for a mood
    Create(CreateOptions),

    /// Play the playlist created last
    PlayPlaylist(PlayPlaylistOptions),

    /// Start or resume playback
    Play,

    /// Pause playback
    Pause,

    /// Skip to the next track
    Next,

    /// Skip to the previous track
    Previous,

    /// Toggle shuffle, or set it explicitly
    Shuffle(ShuffleOptions),

    /// Cycle repeat (off, track, context), or set it explicitly
    Repeat(RepeatOptions),

    /// Control playback with voice commands
    Voice,

    /// List the voice commands
    Commands,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    /// Your name, used in the playlist title
    #[clap(long, default_value = "")]
    user_name: String,

    /// Mood to search for
    #[clap(long, default_value = "")]
    mood: String,

    /// Optional artist
    #[clap(long, default_value = "")]
    artist: String,

    /// Optional language
    #[clap(long, default_value = "")]
    language: String,

    /// Number of tracks
    #[clap(long, default_value_t = DEFAULT_PLAYLIST_SIZE.to_string())]
    size: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayPlaylistOptions {
    /// Play this playlist id instead of the one created last
    #[clap(long)]
    playlist_id: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShuffleOptions {
    #[clap(long, conflicts_with = "off")]
    on: bool,
    #[clap(long)]
    off: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RepeatOptions {
    /// off, track or context
    #[clap(long, value_parser = utils::parse_repeat_state)]
    state: Option<RepeatState>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("{}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Create(opt) => {
            cli::create(PlaylistForm {
                user_name: opt.user_name,
                mood: opt.mood,
                artist: opt.artist,
                language: opt.language,
                size: opt.size,
            })
            .await
        }
        Command::PlayPlaylist(opt) => cli::play_playlist(opt.playlist_id).await,
        Command::Play => cli::playback(Action::Play).await,
        Command::Pause => cli::playback(Action::Pause).await,
        Command::Next => cli::playback(Action::Next).await,
        Command::Previous => cli::playback(Action::Previous).await,
        Command::Shuffle(opt) => {
            let action = match (opt.on, opt.off) {
                (true, _) => Action::SetShuffle(true),
                (_, true) => Action::SetShuffle(false),
                _ => Action::ToggleShuffle,
            };
            cli::playback(action).await
        }
        Command::Repeat(opt) => {
            let action = opt.state.map_or(Action::ToggleRepeat, Action::SetRepeat);
            cli::playback(action).await
        }
        Command::Voice => {
            cli::voice().await;
            // The stdin reader thread cannot be cancelled; don't wait for it.
            std::process::exit(0);
        }
        Command::Commands => cli::commands(),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
