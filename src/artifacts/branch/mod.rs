pub mod branch_name;
pub mod revision;

pub const FORBIDDEN_CHARACTERS_REGEX: &str = r"[\x00-\x20\*:\?\[\\~\^\x7f]";
pub const HEAD_REF_NAME: &str = "HEAD";
pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};
