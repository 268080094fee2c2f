mod headers;
mod options;
mod region_key;
