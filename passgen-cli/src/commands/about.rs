use crate::desktop::NativeSaveDialog;
use crate::{App, Config, Desktop};

pub fn run(conf: Config) {
    App::new(conf, Desktop::system(Box::new(NativeSaveDialog))).about();
}
