mod command;
mod exec;
