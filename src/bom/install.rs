use std::fs;
use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};
use tracing::{debug, trace};

use crate::error::{BomError, BomResult};
use crate::maven::coordinates::MavenArtifact;
use crate::maven::paths::as_maven_path;

/// Copies an artifact's file into a local repository using the Maven layout, next to `.sha1` and
///  `.md5` files holding the hex encoded checksums. Returns the path of the installed file.
pub fn install(artifact: &MavenArtifact, file: &Path, repository: &Path) -> BomResult<PathBuf> {
    let data = fs::read(file)
        .map_err(|e| BomError::io(file, e))?;

    let target = repository.join(as_maven_path(artifact));
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| BomError::io(parent, e))?;
    }

    trace!("installing {} as {}", file.display(), target.display());
    fs::write(&target, &data)
        .map_err(|e| BomError::io(&target, e))?;

    let mut sha1_hasher: Sha1 = Default::default();
    sha1_hasher.update(&data);
    let sha1: [u8; 20] = sha1_hasher.finalize().into();
    let md5: [u8; 16] = md5::compute(&data).into();

    write_checksum(&target, "sha1", &hex::encode(sha1))?;
    write_checksum(&target, "md5", &hex::encode(md5))?;

    debug!("installed {} to {}", artifact, target.display());
    Ok(target)
}

fn write_checksum(target: &Path, extension: &str, checksum: &str) -> BomResult<()> {
    let mut path = target.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    let path = PathBuf::from(path);

    fs::write(&path, checksum)
        .map_err(|e| BomError::io(&path, e))
}
