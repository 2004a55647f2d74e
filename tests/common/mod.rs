use assert_cmd::Command;
use std::path::Path;

pub fn goodthings_cmd() -> Command {
    let mut cmd = Command::cargo_bin("goodthings").unwrap();
    cmd.env_remove("GOODTHINGS_ROOT");
    cmd.env_remove("GOODTHINGS_LOG");
    cmd
}

/// Command running inside an initialized journal at `root`
#[allow(dead_code)]
pub fn journal_cmd(root: &Path) -> Command {
    let mut cmd = goodthings_cmd();
    cmd.current_dir(root);
    cmd
}
