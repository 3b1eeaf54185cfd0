//! One wrapper per intercepted primitive.
//!
//! Every wrapper relocates its path (or command) argument, forwards all other
//! arguments untouched to the real primitive, and returns its result with
//! errno as the real primitive left it.

mod dirent;
mod dl;
mod fs;
mod link;
mod open;
mod spawn;
mod stat;
