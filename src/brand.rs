//! Identity, contact and style data of the current brand.
//!
//! Application code should read brand strings from [`BRAND`] instead of
//! hard-coding them. The audit does not consult this module at runtime; when
//! these values change, the strings they replace belong in the built-in token
//! list.

/// Colour palette, as `#RRGGBB` hex codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colours {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub neutral_dark: &'static str,
    pub neutral_light: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPaths {
    pub full: &'static str,
    pub mark: &'static str,
    pub favicon: &'static str,
    pub header_logo: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub company_name: &'static str,
    pub short_name: &'static str,
    pub legal_name: &'static str,
    pub tagline: &'static str,
    pub primary_domain: &'static str,
    pub alt_domains: &'static [&'static str],
    pub primary_phone_display: &'static str,
    pub primary_phone_dial: &'static str,
    pub primary_email: &'static str,
    pub service_area: &'static [&'static str],
    pub primary_location: &'static str,
    pub colours: Colours,
    pub logo_paths: LogoPaths,
}

pub const BRAND: Brand = Brand {
    company_name: "Jason's Junk Hauling",
    short_name: "Jason's Junk",
    legal_name: "Jason's Junk Hauling Ltd.",
    tagline: "Fast, Reliable Junk Removal & Hauling Services",
    primary_domain: "jasonsjunkhauling.ca",
    alt_domains: &["www.jasonsjunkhauling.ca"],
    primary_phone_display: "(250) 555-0200",
    primary_phone_dial: "+12505550200",
    primary_email: "info@jasonsjunkhauling.ca",
    service_area: &["Greater Victoria", "South Vancouver Island", "Gulf Islands"],
    primary_location: "Victoria, BC",
    colours: Colours {
        primary: "#F97316",
        secondary: "#16A34A",
        accent: "#EA580C",
        neutral_dark: "#1E1E1E",
        neutral_light: "#F9FAFB",
        success: "#059669",
        warning: "#D97706",
    },
    logo_paths: LogoPaths {
        full: "/images/jjh-logo-full.svg",
        mark: "/images/jjh-mark.svg",
        favicon: "/images/jjh-favicon.png",
        header_logo: "/images/jjh-header-logo.png",
    },
};

impl Brand {
    /// Every string value, for checks that sweep the whole record.
    #[must_use]
    pub fn values(&self) -> Vec<&'static str> {
        let mut values = vec![
            self.company_name,
            self.short_name,
            self.legal_name,
            self.tagline,
            self.primary_domain,
            self.primary_phone_display,
            self.primary_phone_dial,
            self.primary_email,
            self.primary_location,
            self.colours.primary,
            self.colours.secondary,
            self.colours.accent,
            self.colours.neutral_dark,
            self.colours.neutral_light,
            self.colours.success,
            self.colours.warning,
            self.logo_paths.full,
            self.logo_paths.mark,
            self.logo_paths.favicon,
            self.logo_paths.header_logo,
        ];
        values.extend_from_slice(self.alt_domains);
        values.extend_from_slice(self.service_area);
        values
    }

    /// The `tel:` URI for the primary phone number.
    #[must_use]
    pub fn phone_href(&self) -> String {
        format!("tel:{}", self.primary_phone_dial)
    }

    /// The `mailto:` URI for the primary email address.
    #[must_use]
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.primary_email)
    }
}
