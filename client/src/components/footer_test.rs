use super::*;

#[test]
fn copyright_line_with_fixed_clock() {
    assert_eq!(
        copyright_line("Eli's Barbershop", 2025),
        "© 2025 Eli's Barbershop. All rights reserved."
    );
}

#[test]
fn copyright_line_uses_the_given_year() {
    let line = copyright_line("Eli's Barbershop of Galesburg", 2031);
    assert!(line.starts_with("© 2031 "));
    assert!(line.ends_with("Eli's Barbershop of Galesburg. All rights reserved."));
}
