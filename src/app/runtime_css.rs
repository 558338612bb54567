use gtk4::CssProvider;

use crate::ui::{COLOR_TOKENS, ENTRY_HINT_CLASS, FONT_NAME, LAYOUT_TOKENS};

pub(super) fn install_runtime_css() {
    let colors = COLOR_TOKENS;
    let css = format!(
        "
window.lovely-root {{
  background: {background};
}}
.address-entry {{
  font-family: \"{font}\";
  font-size: {entry_font_size}pt;
  color: {input_color};
}}
.address-entry.{hint_class} {{
  color: {hint_color};
}}
.status-message {{
  color: #8B0000;
  font-size: 10pt;
}}
",
        background = colors.app_background.to_css_hex(),
        font = FONT_NAME,
        entry_font_size = LAYOUT_TOKENS.entry_font_size,
        input_color = colors.entry_foreground.to_css_hex(),
        hint_class = ENTRY_HINT_CLASS,
        hint_color = colors.entry_hint_foreground.to_css_hex(),
    );

    let provider = CssProvider::new();
    provider.load_from_data(&css);
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
