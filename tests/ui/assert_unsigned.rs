// Author: Lukas Bower

char_probe::assert_char_unsigned!();

fn main() {}
