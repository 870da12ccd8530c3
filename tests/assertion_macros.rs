// Author: Lukas Bower

use char_probe::CHAR_IS_SIGNED;

#[test]
fn matching_assertion_compiles() {
    let t = trybuild::TestCases::new();
    if CHAR_IS_SIGNED {
        t.pass("tests/ui/assert_signed.rs");
    } else {
        t.pass("tests/ui/assert_unsigned.rs");
    }
}
