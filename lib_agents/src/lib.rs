mod human_agent;
mod token_reader;

pub use human_agent::HumanAgent;
pub use token_reader::{InputError, TokenReader};
