//! User-facing Text
//!
//! Localized (Italian) flash messages and confirmation prompts.

pub const PHOTO_DELETED: &str = "Foto eliminata con successo!";
pub const PHOTO_DELETE_ERROR: &str = "Errore durante eliminazione foto.";
pub const PHOTOS_UPLOADED: &str = "Foto caricate con successo!";
pub const PHOTOS_UPLOAD_ERROR: &str = "Errore durante upload foto.";
pub const ITEM_DELETE_ERROR: &str = "Errore durante l'eliminazione.";
pub const EXPORT_ERROR: &str = "Errore nel download.";
pub const TRANSFER_STARTED: &str = "Richiesta trasferimento avviata, a breve verrà aperto Outlook.";
pub const TRANSFER_PROMPT: &str = "Vuoi aprire Outlook per preparare la mail di trasferimento?";

pub fn delete_photo_prompt(filename: &str) -> String {
    format!("Sei sicuro di voler eliminare la foto {filename}?")
}

pub fn delete_item_prompt(collo: &str, matricola: &str) -> String {
    format!(
        "Sei sicuro di voler eliminare \"{collo} - {matricola}\"?\nL'operazione è irreversibile e rimuoverà anche le foto."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_item_prompt_names_row() {
        let prompt = delete_item_prompt("C-12", "SN-4");
        assert!(prompt.starts_with("Sei sicuro di voler eliminare \"C-12 - SN-4\"?\n"));
        assert!(prompt.ends_with("rimuoverà anche le foto."));
    }

    #[test]
    fn test_delete_photo_prompt() {
        assert_eq!(delete_photo_prompt("a.jpg"), "Sei sicuro di voler eliminare la foto a.jpg?");
    }
}
