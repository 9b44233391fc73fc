use clap::Command;

pub fn cli() -> Command {
    Command::new("prtally")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Counts pull requests closed during the last three months across an organization")
}
