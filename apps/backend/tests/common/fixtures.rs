//! Test fixtures and factory functions for creating test data.

use faq_core::FaqItem;
use ipad_help_backend::services::catalog::Catalog;

pub const WLAN_ID: &str = "wlan-1";
pub const SCREENSHOT_ID: &str = "screenshot-1";
pub const GOODNOTES_ID: &str = "goodnotes-1";
pub const PAGES_ID: &str = "pages-1";
pub const BACKUP_ID: &str = "backup-1";

/// Create a FAQ item.
pub fn faq(id: &str, question: &str, answer: &str, category: &str) -> FaqItem {
    FaqItem::new(id, question, answer, category)
}

/// Items covering every section kind and several categories.
pub fn items() -> Vec<FaqItem> {
    vec![
        faq(
            WLAN_ID,
            "Wie verbinde ich mich mit dem Heim-WLAN?",
            "1. Öffne 'Einstellungen' > 'WLAN'\n2. Wähle dein Heimnetzwerk\n\nWichtig: Das WLAN-Passwort bekommst du von deinen Eltern.",
            "Erste Schritte",
        ),
        faq(
            GOODNOTES_ID,
            "Wie nutze ich GoodNotes für Arbeitsblätter?",
            "1. **PDF importieren:** Tippe '+'\n2. **Speichern:** Automatisch\n\nTipp: Erstelle Ordner für jedes Fach.",
            "Apps & Tools",
        ),
        faq(
            SCREENSHOT_ID,
            "Wie mache ich Screenshots?",
            "**Screenshot:**\n1. Drücke beide Tasten\n2. Bild erscheint\n\n**Bildschirmaufnahme:**\n1. Kontrollzentrum öffnen\nDanach startet die Aufnahme.",
            "Erste Schritte",
        ),
        faq(
            PAGES_ID,
            "Wie organisiere ich Seiten in Pages?",
            "Tippe das Seiten-Symbol.\nAchtung: Gelöschte Seiten sind weg, auch im WLAN-Backup.",
            "Apps & Tools",
        ),
        faq(
            BACKUP_ID,
            "Wie sichere ich meine Dateien?",
            "Nutze iCloud Drive.",
            "Dateien & Organisation",
        ),
    ]
}

/// Catalog built from [`items`].
pub fn catalog() -> Catalog {
    Catalog::from_items(items()).expect("fixture ids are unique")
}
