use super::domain::LetterType;

/// Static mapping from letter type to its required supporting documents.
///
/// The table is deployment configuration, not user data: it is baked into the
/// binary and shared without synchronization. Residents may still label
/// uploads however they like; the catalog only drives checklist display.
pub struct ChecklistCatalog;

impl ChecklistCatalog {
    pub const fn required_documents(letter_type: LetterType) -> &'static [&'static str] {
        match letter_type {
            LetterType::PengantarKtp => {
                &["Fotokopi Kartu Keluarga", "Fotokopi KTP lama (jika ada)"]
            }
            LetterType::PengantarKk => &[
                "Fotokopi KTP kepala keluarga",
                "Fotokopi KK lama",
                "Surat keterangan perubahan (lahir/meninggal/pindah) jika ada",
            ],
            LetterType::PengantarDomisili => &[
                "Fotokopi KTP",
                "Fotokopi KK",
                "Surat pernyataan domisili (opsional)",
            ],
            LetterType::PengantarSkck => {
                &["Fotokopi KTP", "Fotokopi KK", "Pas foto (opsional)"]
            }
            LetterType::PengantarNikah => &[
                "Fotokopi KTP calon",
                "Fotokopi KK",
                "Surat pengantar RT (opsional)",
            ],
            LetterType::PengantarUsaha => &[
                "Fotokopi KTP",
                "Fotokopi KK",
                "Surat pernyataan usaha sederhana",
            ],
            LetterType::PengantarTidakMampu => &[
                "Fotokopi KTP",
                "Fotokopi KK",
                "Surat keterangan tidak mampu (opsional)",
            ],
        }
    }
}

/// Normalization applied to both checklist labels and uploaded document types
/// before comparison: surrounding whitespace is irrelevant, as is case.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}
