//! Glyphs standing in for the icon set named by content (`"icon": "search"`).

pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "search" => "🔍",
        "bell" => "🔔",
        "file" => "📄",
        "chart" => "📊",
        "mail" => "✉",
        "users" => "👥",
        "check" => "✔",
        "zap" => "⚡",
        "shield" => "🛡",
        "award" => "🏅",
        "clock" => "🕒",
        "star" => "★",
        other => {
            tracing::warn!(icon = other, "unknown icon name");
            "•"
        }
    }
}
