// crates/engine/src/header.rs
use std::borrow::Cow;
use std::ffi::OsStr;

/// License block prepended to every target file.
pub const LICENSE_HEADER: &str = r#"//
// Copyright 2025 Ariorad Moniri
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
"#;

/// File-name suffix selecting the files to process (dot included).
pub const TARGET_EXTENSION: &str = ".swift";

/// Whether `content` already carries `header`.
///
/// Only the outer ends of the header are trimmed; the inner lines must match
/// exactly. `\r\n` and lone `\r` line endings in `content` compare as `\n`.
#[must_use]
pub fn has_header(content: &str, header: &str) -> bool {
    normalize_newlines(content).contains(header.trim())
}

fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Header, a newline, then the original content.
#[must_use]
pub fn with_header(header: &str, content: &str) -> String {
    let mut out = String::with_capacity(header.len() + 1 + content.len());
    out.push_str(header);
    out.push('\n');
    out.push_str(content);
    out
}

/// Case-sensitive suffix match on the raw file name.
#[must_use]
pub fn matches_extension(file_name: &OsStr, extension: &str) -> bool {
    file_name.as_encoded_bytes().ends_with(extension.as_bytes())
}
