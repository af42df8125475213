mod graph_file;
mod misc;
mod neighbors;
mod path;
mod support;
