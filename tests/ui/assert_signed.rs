// Author: Lukas Bower

char_probe::assert_char_signed!();

fn main() {}
