mod common;
mod extraction;
mod intake;
