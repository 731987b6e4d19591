use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the locally stored progress
    Show,

    /// Merge two progress snapshot files and print the result
    Merge {
        /// First snapshot (JSON)
        a: PathBuf,
        /// Second snapshot (JSON)
        b: PathBuf,
    },

    /// Sync local progress with the cloud for one user
    Sync {
        /// Authenticated user ID
        #[arg(long)]
        user_id: String,

        /// User was authenticated by the fallback backend
        #[arg(long)]
        fallback: bool,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        display_name: Option<String>,
    },
}
