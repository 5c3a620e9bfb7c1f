//! ODF package handling.
//!
//! A package is either a ZIP archive (the usual `.odt` file) or a directory
//! holding the already-extracted members. Both expose the same
//! [`OdfPackage`] interface: the trimmed MIME type plus member access by path.

use crate::common::{Error, Result};
use crate::odf::constants::ODF_MIMETYPE;
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

/// Read access to the members of an ODF package.
pub trait OdfPackage {
    /// MIME type from the `mimetype` member, trimmed.
    fn mimetype(&self) -> &str;

    /// Get a member by path.
    ///
    /// # Errors
    ///
    /// Returns `Error::ComponentNotFound` if the member does not exist.
    fn get_file(&self, path: &str) -> Result<Vec<u8>>;

    /// Check if a member exists.
    fn has_file(&self, path: &str) -> bool;

    /// List all member paths.
    fn files(&self) -> Result<Vec<String>>;

    /// Get a member that a package may legitimately omit.
    fn get_optional_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        if self.has_file(path) {
            self.get_file(path).map(Some)
        } else {
            Ok(None)
        }
    }
}

/// An ODF package backed by a ZIP archive.
pub struct Package<R> {
    archive: RefCell<zip::ZipArchive<R>>,
    mimetype: String,
}

impl Package<BufReader<File>> {
    /// Open a ZIP package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> Package<R> {
    /// Open an ODF package from a reader
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader)
            .map_err(|e| Error::InvalidFormat(format!("Invalid ZIP archive: {}", e)))?;
        Self::from_zip_archive(archive)
    }

    /// Create an ODF package from an already-parsed ZIP archive.
    pub fn from_zip_archive(mut archive: zip::ZipArchive<R>) -> Result<Self> {
        let mimetype = Self::read_mimetype(&mut archive)?;

        Ok(Self {
            archive: RefCell::new(archive),
            mimetype,
        })
    }

    /// Read MIME type from the mimetype file
    fn read_mimetype(archive: &mut zip::ZipArchive<R>) -> Result<String> {
        let mut mimetype_file = archive.by_name(ODF_MIMETYPE).map_err(|_| {
            Error::InvalidFormat("No mimetype file found in ODF package".to_string())
        })?;

        let mut content = String::new();
        mimetype_file.read_to_string(&mut content)?;
        Ok(content.trim().to_string())
    }
}

impl<R: Read + Seek> OdfPackage for Package<R> {
    fn mimetype(&self) -> &str {
        &self.mimetype
    }

    fn get_file(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::ComponentNotFound(path.to_string()))?;

        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    fn has_file(&self, path: &str) -> bool {
        self.archive.borrow_mut().by_name(path).is_ok()
    }

    fn files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let mut archive = self.archive.borrow_mut();
        for i in 0..archive.len() {
            let file = archive.by_index(i)?;
            files.push(file.name().to_string());
        }
        Ok(files)
    }
}

/// An ODF package whose members were extracted into a directory.
#[derive(Debug, Clone)]
pub struct DirectoryPackage {
    root: PathBuf,
    mimetype: String,
}

impl DirectoryPackage {
    /// Open an extracted package directory.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let mimetype = std::fs::read_to_string(root.join(ODF_MIMETYPE)).map_err(|_| {
            Error::InvalidFormat("No mimetype file found in ODF package".to_string())
        })?;

        Ok(Self {
            root,
            mimetype: mimetype.trim().to_string(),
        })
    }

    /// Directory the members live in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn member_path(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }

    fn collect_files(dir: &Path, prefix: &str, files: &mut Vec<String>) -> Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = format!("{}{}", prefix, entry.file_name().to_string_lossy());
            if entry.file_type()?.is_dir() {
                Self::collect_files(&entry.path(), &format!("{}/", name), files)?;
            } else {
                files.push(name);
            }
        }
        Ok(())
    }
}

impl OdfPackage for DirectoryPackage {
    fn mimetype(&self) -> &str {
        &self.mimetype
    }

    fn get_file(&self, path: &str) -> Result<Vec<u8>> {
        let member = self.member_path(path);
        if !member.is_file() {
            return Err(Error::ComponentNotFound(path.to_string()));
        }
        Ok(std::fs::read(member)?)
    }

    fn has_file(&self, path: &str) -> bool {
        self.member_path(path).is_file()
    }

    fn files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        Self::collect_files(&self.root, "", &mut files)?;
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn zip_bytes(members: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in members {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_zip_package() {
        let bytes = zip_bytes(&[
            ("mimetype", "application/vnd.oasis.opendocument.text\n"),
            ("content.xml", "<a/>"),
        ]);
        let package = Package::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(package.mimetype(), "application/vnd.oasis.opendocument.text");
        assert_eq!(package.get_file("content.xml").unwrap(), b"<a/>");
        assert!(package.has_file("content.xml"));
        assert!(!package.has_file("styles.xml"));
        assert!(package.get_optional_file("styles.xml").unwrap().is_none());
        assert!(matches!(
            package.get_file("styles.xml"),
            Err(Error::ComponentNotFound(_))
        ));
        assert_eq!(package.files().unwrap(), ["mimetype", "content.xml"]);
    }

    #[test]
    fn test_zip_package_requires_mimetype() {
        let bytes = zip_bytes(&[("content.xml", "<a/>")]);
        assert!(matches!(
            Package::from_reader(Cursor::new(bytes)),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_not_a_zip() {
        let result = Package::from_reader(Cursor::new(b"plain text".to_vec()));
        assert!(matches!(result, Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_directory_package() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mimetype"), " application/vnd.oasis.opendocument.text ")
            .unwrap();
        std::fs::write(dir.path().join("content.xml"), "<a/>").unwrap();
        std::fs::create_dir(dir.path().join("META-INF")).unwrap();
        std::fs::write(dir.path().join("META-INF").join("manifest.xml"), "<m/>").unwrap();

        let package = DirectoryPackage::open(dir.path()).unwrap();
        assert_eq!(package.mimetype(), "application/vnd.oasis.opendocument.text");
        assert_eq!(package.get_file("content.xml").unwrap(), b"<a/>");
        assert_eq!(package.get_file("META-INF/manifest.xml").unwrap(), b"<m/>");
        assert!(!package.has_file("settings.xml"));
        assert!(!package.has_file("META-INF"));
        assert_eq!(
            package.files().unwrap(),
            ["META-INF/manifest.xml", "content.xml", "mimetype"]
        );
    }

    #[test]
    fn test_directory_package_requires_mimetype() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            DirectoryPackage::open(dir.path()),
            Err(Error::InvalidFormat(_))
        ));
    }
}
