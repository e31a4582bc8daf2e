//! External Links
//!
//! URL builders for the third-party services the client only links to:
//! generated avatars, map directions, and media served by the API host.

use crate::model::LatLng;

const AVATAR_BASE: &str = "https://api.dicebear.com/9.x/initials/svg";
const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

/// Initials avatar for a commenter
pub fn avatar_url(seed: &str) -> String {
    format!(
        "{}?seed={}&background=%2304a777&color=white",
        AVATAR_BASE,
        urlencoding::encode(seed)
    )
}

/// Driving directions to a location
pub fn directions_url(location: LatLng) -> String {
    format!(
        "{}?api=1&destination={},{}",
        DIRECTIONS_BASE, location.lat, location.lng
    )
}

/// Profile picture served under the API's `media/` prefix
pub fn profile_picture_url(api_base: &str, picture: &str) -> String {
    format!("{}media/{}", with_trailing_slash(api_base), picture.trim_start_matches('/'))
}

/// Post image, whose path already carries the media prefix
pub fn post_image_url(api_base: &str, image: &str) -> String {
    format!("{}{}", with_trailing_slash(api_base), image.trim_start_matches('/'))
}

/// Normalize a base URL so relative paths can be appended
pub fn with_trailing_slash(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url_encodes_seed() {
        assert_eq!(
            avatar_url("Ana Silva"),
            "https://api.dicebear.com/9.x/initials/svg?seed=Ana%20Silva&background=%2304a777&color=white"
        );
    }

    #[test]
    fn test_directions_url() {
        let url = directions_url(LatLng {
            lat: 12.97,
            lng: 77.59,
        });
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&destination=12.97,77.59"
        );
    }

    #[test]
    fn test_media_urls() {
        assert_eq!(
            profile_picture_url("http://localhost:8000", "profile_pictures/a.png"),
            "http://localhost:8000/media/profile_pictures/a.png"
        );
        assert_eq!(
            post_image_url("http://localhost:8000/", "/media/posts/b.jpg"),
            "http://localhost:8000/media/posts/b.jpg"
        );
    }
}
