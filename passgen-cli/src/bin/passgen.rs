use anyhow::Result;
use passgen_cli::commands::{about, form, gen};
use passgen_cli::Config;
use std::path::PathBuf;
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "passgen",
    about = "Generate random passwords, copy them to the clipboard or save them to a file"
)]
struct Opt {
    /// Read the configuration from <config> instead of the default location
    #[structopt(short = "C", long = "config", parse(from_os_str))]
    config: Option<PathBuf>,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Generate a password and print it
    #[structopt(
        name = "gen",
        alias = "generate",
        setting = AppSettings::AllowNegativeNumbers
    )]
    GEN {
        /// Number of characters (defaults to the configured length)
        #[structopt(name = "length")]
        length: Option<String>,
        /// Copy the password to the clipboard
        #[structopt(short, long)]
        copy: bool,
        /// Save the password to <file>. An existing file will be overwritten
        #[structopt(short = "o", long = "output", name = "file", parse(from_os_str))]
        output_file: Option<PathBuf>,
        /// Choose where to save the password with a file dialog
        #[structopt(short, long, conflicts_with = "file")]
        save: bool,
    },
    /// Beep and show what this program is
    #[structopt(name = "about")]
    ABOUT {},
    /// Work on a length field and a password field interactively
    #[structopt(name = "form")]
    FORM {
        /// Use the native file dialog instead of asking on the terminal
        #[structopt(long = "native-dialog")]
        native_dialog: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opt = Opt::from_args();
    let conf = Config::load(opt.config.as_deref());

    match opt.cmd {
        Command::GEN {
            length,
            copy,
            output_file,
            save,
        } => gen::run(conf, length, copy, output_file, save)?,
        Command::ABOUT {} => about::run(conf),
        Command::FORM { native_dialog } => form::run(conf, native_dialog)?,
    };

    Ok(())
}
