//! Compiles textual condition expressions such as `deployed && !(ammo == 0)` and evaluates
//! them against integer variables.

pub mod interpreter;
