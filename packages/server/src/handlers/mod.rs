pub mod artist;
pub mod pages;
pub mod show;
pub mod venue;
