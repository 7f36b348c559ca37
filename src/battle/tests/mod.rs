mod common;
mod test_fainting;
