//! Player implementations for the console front end.

mod console;

pub use console::ConsolePlayer;
