#![deny(clippy::all, clippy::pedantic)]

use bozza::domain::posts::TAG_VOCABULARY;

use crate::args::TagsCmd;
use crate::context::CliError;
use crate::print::print_json;

pub fn handle(cmd: TagsCmd) -> Result<(), CliError> {
    match cmd {
        TagsCmd::List => print_json(&TAG_VOCABULARY),
    }
}
