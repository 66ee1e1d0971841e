// Test fixtures for integration testing

use quickbible::core::config::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Small corpus in canonical order
///
/// Empty `<c/>` elements pad chapter numbering so the populated
/// chapters land on their real numbers. Genesis carries one malformed
/// entry ("Selah") that the loader must skip.
#[allow(dead_code)] // Used in integration tests
pub const BIBLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bible translation="World English Bible">
  <book>
    <h>Genesis</h>
    <c>
      <v>1. In the beginning, God created the heavens and the earth.</v>
      <v>2. The earth was formless and empty.</v>
      <v>3. God said, &quot;Let there be light,&quot; and there was light.</v>
      <v>Selah</v>
    </c>
  </book>
  <book>
    <h>Song of Solomon</h>
    <c/><c/><c/>
    <c>
      <v>1. Behold, you are beautiful, my love.</v>
      <v>2. Your teeth are like a newly shorn flock.</v>
    </c>
  </book>
  <book>
    <h>John</h>
    <c>
      <v>1. In the beginning was the Word, and the Word was with God, and the Word was God.</v>
      <v>2. The same was in the beginning with God.</v>
      <v>3. All things were made through him.</v>
    </c>
    <c/>
    <c>
      <v>16. For God so loved the world, that he gave his one and only Son.</v>
      <v>17. For God didn't send his Son into the world to judge the world.</v>
    </c>
    <c/><c/><c/><c/><c/><c/><c/>
    <c>
      <v>33. When Jesus saw Mary, she wept at his feet.</v>
      <v>34. He said, &quot;Where have you laid him?&quot;</v>
      <v>35. Jesus wept.</v>
      <v>36. The Jews therefore said, &quot;See how much affection he had for him!&quot;</v>
    </c>
  </book>
  <book>
    <h>1 Corinthians</h>
    <c/><c/><c/><c/><c/><c/><c/><c/><c/><c/><c/><c/>
    <c>
      <v>4. Love is patient and is kind; love doesn't envy.</v>
      <v>13. But now faith, hope, and love remain; the greatest of these is love.</v>
    </c>
  </book>
  <book>
    <h>2 Corinthians</h>
    <c>
      <v>1. Paul, an apostle of Christ Jesus through the will of God.</v>
    </c>
  </book>
  <book>
    <h>1 John</h>
    <c/><c/><c/>
    <c>
      <v>8. He who doesn't love doesn't know God, for God is love.</v>
    </c>
  </book>
</bible>
"#;

/// Cross references in the OpenBible TSV layout, header included
#[allow(dead_code)] // Used in integration tests
pub const CROSS_REFERENCES_TSV: &str = "From Verse\tTo Verse\tVotes\t#www.openbible.info CC-BY 2024-01-01
Gen.1.1\tJohn.1.1-John.1.3\t354
Gen.1.1\tJohn.1.2\t12
Gen.1.1\t1John.4.8\t-3
John.3.16\t1John.4.8\t120
John.3.16\t1Cor.13.4-1Cor.13.13\t87
John.3.16\tGen.1.1-John.1.1\t5
John.3.16\tSong.4.1\t1
John.11.35\tJohn.11.33\t44
Zzz.1.1\tGen.1.1\t10
Gen.1.2\tJohn.1.1\tmany
";

/// Fixture data written to a temporary directory
#[allow(dead_code)] // Used in integration tests
pub struct TestData {
    pub dir: TempDir,
    pub bible_path: PathBuf,
    pub cross_references_path: PathBuf,
}

impl TestData {
    /// Write the default fixture corpus and cross references
    #[allow(dead_code)] // Used in integration tests
    pub fn standard() -> Self {
        Self::with_contents(Some(BIBLE_XML), Some(CROSS_REFERENCES_TSV))
    }

    /// Write only the files given; `None` leaves that file missing
    #[allow(dead_code)] // Used in integration tests
    pub fn with_contents(bible: Option<&str>, cross_references: Option<&str>) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let bible_path = dir.path().join("web.xml");
        let cross_references_path = dir.path().join("cross_references.txt");

        if let Some(xml) = bible {
            std::fs::write(&bible_path, xml).expect("Failed to write corpus");
        }
        if let Some(tsv) = cross_references {
            std::fs::write(&cross_references_path, tsv).expect("Failed to write cross references");
        }

        Self {
            dir,
            bible_path,
            cross_references_path,
        }
    }

    /// Default configuration pointing at the fixture files
    #[allow(dead_code)] // Used in integration tests
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.corpus.bible_path = self.bible_path.clone();
        config.corpus.cross_references_path = self.cross_references_path.clone();
        config
    }

    /// Get the temp directory path
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
