use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating image references of animals
    /// Must be an absolute URL path ending in an svg or png file
    /// - Valid: "/static/wildatlas/images/bear_logo.svg", "/img/red-fox.png"
    /// - Invalid: "bear.svg", "/static/", "/static/bear.gif", "/static/my bear.svg"
    pub static ref IMAGE_PATH_REGEX: Regex =
        Regex::new(r"^(/[A-Za-z0-9._-]+)*/[A-Za-z0-9_-][A-Za-z0-9._-]*\.(svg|png)$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_path_regex_valid() {
        assert!(IMAGE_PATH_REGEX.is_match("/static/wildatlas/images/bear_logo.svg"));
        assert!(IMAGE_PATH_REGEX.is_match("/static/wildatlas/images/redfox_pin.svg"));
        assert!(IMAGE_PATH_REGEX.is_match("/img/red-fox.png"));
        assert!(IMAGE_PATH_REGEX.is_match("/wolf.svg"));
    }

    #[test]
    fn test_image_path_regex_invalid() {
        assert!(!IMAGE_PATH_REGEX.is_match("bear.svg")); // relative
        assert!(!IMAGE_PATH_REGEX.is_match("/static/")); // no file
        assert!(!IMAGE_PATH_REGEX.is_match("/static/bear.gif")); // extension
        assert!(!IMAGE_PATH_REGEX.is_match("/static/my bear.svg")); // space
        assert!(!IMAGE_PATH_REGEX.is_match("")); // empty
    }
}
