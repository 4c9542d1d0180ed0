#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, remove_dir_all, File};
    use std::path::PathBuf;
    use std::process;
    use passive_dendrite::figures::{date_stamp, next_figure_number, resolve_figure_path};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("passive_dendrite_{}_{}", name, process::id()));

        if dir.exists() {
            remove_dir_all(&dir).unwrap();
        }

        dir
    }

    #[test]
    pub fn test_missing_directory_is_created_and_starts_at_one() {
        let dir = scratch_dir("missing");

        let number = next_figure_number(&dir).unwrap();
        assert_eq!(number, "01");
        assert!(dir.exists());

        remove_dir_all(&dir).unwrap();
    }

    #[test]
    pub fn test_empty_directory_starts_at_one() {
        let dir = scratch_dir("empty");
        create_dir_all(&dir).unwrap();

        let number = next_figure_number(&dir).unwrap();
        assert_eq!(number, "01");

        remove_dir_all(&dir).unwrap();
    }

    #[test]
    pub fn test_highest_prior_figure_is_incremented() {
        let dir = scratch_dir("increment");
        create_dir_all(&dir).unwrap();
        File::create(dir.join("v01Jan26_03.png")).unwrap();
        File::create(dir.join("v01Jan26_07.png")).unwrap();
        File::create(dir.join("v02Jan26_05.png")).unwrap();

        let number = next_figure_number(&dir).unwrap();
        assert_eq!(number, "08");

        remove_dir_all(&dir).unwrap();
    }

    #[test]
    pub fn test_zero_padding_carries_past_nine() {
        let dir = scratch_dir("carry");
        create_dir_all(&dir).unwrap();
        File::create(dir.join("v01Jan26_09.png")).unwrap();

        let number = next_figure_number(&dir).unwrap();
        assert_eq!(number, "10");

        remove_dir_all(&dir).unwrap();
    }

    #[test]
    pub fn test_unrelated_files_are_ignored() {
        let dir = scratch_dir("unrelated");
        create_dir_all(&dir).unwrap();
        File::create(dir.join("notes.txt")).unwrap();
        File::create(dir.join("v01Jan26_abc.png")).unwrap();
        File::create(dir.join("v01Jan26_02.png")).unwrap();

        let number = next_figure_number(&dir).unwrap();
        assert_eq!(number, "03");

        remove_dir_all(&dir).unwrap();
    }

    #[test]
    pub fn test_suffix_overrides_auto_numbering() {
        let dir = scratch_dir("suffix");
        create_dir_all(&dir).unwrap();
        File::create(dir.join("v01Jan26_04.png")).unwrap();

        let path = resolve_figure_path(&dir, "01Jan26", Some("control")).unwrap();
        assert_eq!(path, dir.join("v01Jan26_control.png"));

        let path = resolve_figure_path(&dir, "01Jan26", None).unwrap();
        assert_eq!(path, dir.join("v01Jan26_05.png"));

        remove_dir_all(&dir).unwrap();
    }

    #[test]
    pub fn test_date_stamp_format() {
        let stamp = date_stamp();

        // 2 digit day, 3 letter month, 2 digit year
        assert_eq!(stamp.len(), 7);
        assert!(stamp[..2].chars().all(|c| c.is_ascii_digit()));
        assert!(stamp[2..5].chars().all(|c| c.is_ascii_alphabetic()));
        assert!(stamp[5..].chars().all(|c| c.is_ascii_digit()));
    }
}
