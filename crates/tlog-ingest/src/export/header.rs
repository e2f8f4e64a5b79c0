//! Header normalization.

/// Normalize a header cell: strip a BOM, trim, and collapse inner whitespace.
///
/// Hand-edited exports often carry "Salida  programada" or a trailing space;
/// both must still match the schema name.
pub fn normalize_header(value: &str) -> String {
    value
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("\u{feff}Recorrido"), "Recorrido");
        assert_eq!(normalize_header(" Salida   programada "), "Salida programada");
        assert_eq!(normalize_header("Hora\tcambio"), "Hora cambio");
        assert_eq!(normalize_header(""), "");
    }
}
