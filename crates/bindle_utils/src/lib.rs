mod concat_string;
pub mod indexmap;
pub mod path_ext;
