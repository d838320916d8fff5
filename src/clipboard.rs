use crate::error::Result;
use arboard::Clipboard;
use std::time::Duration;

/// Places `text` on the system clipboard exactly as given.
///
/// On X11 and Wayland the contents are served by this process, so the call
/// keeps serving them for up to `hold` (returning early once another
/// application takes ownership) so a clipboard manager or paste can pick
/// them up before the process exits. Elsewhere `hold` is ignored.
pub fn copy_to_clipboard(text: &str, hold: Duration) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    set_text(&mut clipboard, text, hold)?;
    ::log::info!("Copied {} bytes to the clipboard", text.len());
    Ok(())
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text(clipboard: &mut Clipboard, text: &str, hold: Duration) -> Result<()> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    if hold.is_zero() {
        clipboard.set_text(text)?;
    } else {
        ::log::debug!("Serving clipboard contents for up to {:?}", hold);
        clipboard.set().wait_until(Instant::now() + hold).text(text)?;
    }
    Ok(())
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_text(clipboard: &mut Clipboard, text: &str, _hold: Duration) -> Result<()> {
    clipboard.set_text(text)?;
    Ok(())
}
