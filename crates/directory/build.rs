use sha2::{Digest, Sha256};
use std::{env, fs, path::Path};
use walkdir::WalkDir;

fn main() {
    let Ok(manifest) = env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let templates = Path::new(&manifest).join("src/templates");
    // Written into the source tree so `--ui-dir ./static` works without copying from target/
    let output = Path::new(&manifest).join("static");

    if !templates.exists() {
        return;
    }

    println!("cargo:rerun-if-changed={}", templates.display());
    for entry in WalkDir::new(&templates).into_iter().filter_map(|e| e.ok()) {
        if entry.path().extension().is_some_and(|e| e == "css") {
            println!("cargo:rerun-if-changed={}", entry.path().display());
        }
    }

    let _ = fs::create_dir_all(&output);

    build_css(&templates, &output);
}

fn build_css(templates: &Path, output: &Path) {
    let mut combined = String::new();

    // Baseline reset first so page and fragment rules win
    let base = templates.join("styles.css");
    if let Ok(content) = fs::read_to_string(&base) {
        combined.push_str(&content);
        combined.push('\n');
    }

    let mut files: Vec<_> = WalkDir::new(templates)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|e| e == "css"))
        .filter(|e| e.path() != base)
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();

    for file in files {
        if let Ok(content) = fs::read_to_string(&file) {
            if content.trim().is_empty() {
                continue;
            }
            let rel = file.strip_prefix(templates).unwrap_or(&file);
            combined.push_str(&format!("\n/* === {} === */\n", rel.display()));
            combined.push_str(&content);
            combined.push('\n');
        }
    }

    if combined.trim().is_empty() {
        return;
    }

    let minified = minify_css(&combined);
    let hash = hex::encode(Sha256::digest(minified.as_bytes()));
    let short = &hash[..8];

    clean_old_hash_files(output, "styles.", ".min.css", short);

    let _ = fs::write(output.join(format!("styles.{}.min.css", short)), &minified);
    let _ = fs::write(output.join("styles.min.css"), &minified);

    println!(
        "cargo:warning=Built styles.min.css ({} bytes)",
        minified.len()
    );
}

fn minify_css(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut in_comment = false;
    let mut chars = css.chars().peekable();

    while let Some(c) = chars.next() {
        if in_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_comment = false;
            }
            continue;
        }
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            in_comment = true;
            continue;
        }
        if c.is_whitespace() {
            if !out.ends_with(|ch: char| ch.is_whitespace() || "{:;,".contains(ch))
                && chars.peek().is_some_and(|&n| !"{}:;,".contains(n))
            {
                out.push(' ');
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Remove `{prefix}{hash}{suffix}` files whose 8-char hash is not `current_hash`
fn clean_old_hash_files(output: &Path, prefix: &str, suffix: &str, current_hash: &str) {
    let Ok(entries) = fs::read_dir(output) else {
        return;
    };
    for entry in entries.filter_map(|e| e.ok()) {
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if name.starts_with(prefix)
            && name.ends_with(suffix)
            && name.len() > prefix.len() + suffix.len()
        {
            let hash_part = &name[prefix.len()..name.len() - suffix.len()];
            if hash_part.len() == 8
                && hash_part.chars().all(|c| c.is_ascii_hexdigit())
                && hash_part != current_hash
            {
                let _ = fs::remove_file(entry.path());
            }
        }
    }
}
