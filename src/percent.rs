use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Userinfo percent-encode set: C0 controls, space, and every character
/// the authority grammar would otherwise read back as a delimiter.
const USERINFO_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// Percent-encode a username or password for storage in the component model.
pub(crate) fn encode_userinfo(input: &str) -> String {
    utf8_percent_encode(input, USERINFO_SET).to_string()
}
