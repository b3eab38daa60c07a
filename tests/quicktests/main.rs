mod source;
mod tree;
