mod calendar;
mod config;
mod sequence;
mod timestamp;
