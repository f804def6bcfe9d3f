mod ingredient;
mod recipe;
mod tag;

pub use ingredient::*;
pub use recipe::*;
pub use tag::*;

use std::ops::Deref;

#[derive(Clone)]
pub struct Command(pub foodgram_shared::State);

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
