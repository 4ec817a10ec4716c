use super::*;

#[test]
fn interactive_terminal_accepts_both_directions() {
    let mut host = TerminalDisplayHost::with_interactive(true);
    assert_eq!(host.request_fullscreen(true), Ok(()));
    assert_eq!(host.request_fullscreen(false), Ok(()));
}

#[test]
fn non_terminal_output_is_unsupported() {
    let mut host = TerminalDisplayHost::with_interactive(false);
    assert_eq!(
        host.request_fullscreen(true),
        Err(DisplayError::Unsupported)
    );
}
