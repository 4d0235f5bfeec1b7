use super::*;

fn global() -> ShortcutRouter {
    ShortcutRouter::default()
}

#[test]
fn each_alt_chord_navigates_to_its_exact_route() {
    let expected = [
        ("h", "/"),
        ("q", "/tickets/queue"),
        ("m", "/tickets/my-tickets"),
        ("a", "/tickets"),
        ("n", "/tickets/new"),
    ];
    for (key, path) in expected {
        match global().resolve(&KeyChord::alt(key)) {
            KeyOutcome::Navigate(route) => assert_eq!(route.path(), path, "alt+{key}"),
            KeyOutcome::Ignore => panic!("alt+{key} should navigate"),
        }
    }
}

#[test]
fn letters_without_alt_are_ignored() {
    let chord = KeyChord { key: "q".to_owned(), ..KeyChord::default() };
    assert_eq!(global().resolve(&chord), KeyOutcome::Ignore);
}

#[test]
fn unmapped_letters_are_ignored() {
    assert_eq!(global().resolve(&KeyChord::alt("z")), KeyOutcome::Ignore);
    assert_eq!(global().resolve(&KeyChord::alt("Enter")), KeyOutcome::Ignore);
}

#[test]
fn uppercase_key_does_not_match() {
    assert_eq!(global().resolve(&KeyChord::alt("H")), KeyOutcome::Ignore);
}

#[test]
fn shortcuts_fire_inside_fields_by_default() {
    let chord = KeyChord { in_editable: true, ..KeyChord::alt("m") };
    assert_eq!(global().resolve(&chord), KeyOutcome::Navigate(Route::MyTickets));
}

#[test]
fn guarded_router_skips_editable_focus_only() {
    let router = ShortcutRouter { guard_editable: true };
    let typing = KeyChord { in_editable: true, ..KeyChord::alt("m") };
    assert_eq!(router.resolve(&typing), KeyOutcome::Ignore);
    assert_eq!(router.resolve(&KeyChord::alt("m")), KeyOutcome::Navigate(Route::MyTickets));
}

#[test]
fn help_lines_list_every_route() {
    let lines = help_lines();
    assert_eq!(lines.len(), Route::ALL.len());
    assert_eq!(lines[0], "Alt + H: Dashboard");
    assert_eq!(lines[1], "Alt + Q: Ticket Queue");
    assert_eq!(lines[4], "Alt + N: New Ticket");
}
