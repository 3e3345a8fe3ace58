// all variance scenarios are tested in this module
mod bounded_copy;
mod erasure;
mod json;
