mod combination;
mod key;
mod matcher;
mod scroll;
