//! Sharing graphs across threads and tasks

mod shared;
