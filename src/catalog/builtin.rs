//! Built-in reference tables: project types, frameworks, design styles,
//! features and color presets.

use super::{CatalogItem, ColorPreset, FeatureCategory};
use crate::spec::ColorScheme;

pub fn project_types() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("landing", "Landing Page", "Web", "Single page marketing sites"),
        CatalogItem::new(
            "website",
            "Multi-page Website",
            "Web",
            "Complete websites with multiple pages",
        ),
        CatalogItem::new("dashboard", "Admin Dashboard", "Web", "Data visualization and management"),
        CatalogItem::new("ecommerce", "E-commerce Store", "Web", "Online shopping platforms"),
        CatalogItem::new(
            "portfolio",
            "Portfolio Website",
            "Web",
            "Personal or professional portfolios",
        ),
        CatalogItem::new("blog", "Blog/CMS", "Web", "Content management and blogging"),
        CatalogItem::new("saas", "SaaS Application", "Web", "Software as a Service platforms"),
        CatalogItem::new("mobile-ui", "Mobile App UI", "Mobile", "Mobile app user interfaces"),
        CatalogItem::new(
            "component-library",
            "UI Component Library",
            "Design",
            "Reusable UI components",
        ),
        CatalogItem::new("email-template", "Email Template", "Design", "HTML email templates"),
    ]
}

pub fn frameworks() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("nextjs", "Next.js", "Web", "React framework for production").popular(),
        CatalogItem::new("react", "React.js", "Web", "JavaScript library for UIs").popular(),
        CatalogItem::new("vue", "Vue.js", "Web", "Progressive JavaScript framework").popular(),
        CatalogItem::new("svelte", "Svelte", "Web", "Cybernetically enhanced web apps"),
        CatalogItem::new("html", "HTML/CSS/JS", "Web", "Vanilla web technologies"),
        CatalogItem::new("tailwind", "Tailwind CSS", "Web", "Utility-first CSS framework").popular(),
        CatalogItem::new("bootstrap", "Bootstrap", "Web", "CSS framework for responsive design"),
        CatalogItem::new("react-native", "React Native", "Mobile", "Build mobile apps with React"),
    ]
}

pub fn design_styles() -> Vec<CatalogItem> {
    const CATEGORY: &str = "Design Styles";
    vec![
        CatalogItem::new("modern", "Modern & Clean", CATEGORY, "Sleek, contemporary design").popular(),
        CatalogItem::new("minimalist", "Minimalist", CATEGORY, "Less is more approach").popular(),
        CatalogItem::new("material", "Material Design", CATEGORY, "Google's design language").popular(),
        CatalogItem::new("dark", "Dark Theme", CATEGORY, "Dark mode interfaces").popular(),
        CatalogItem::new("corporate", "Corporate", CATEGORY, "Professional business look"),
        CatalogItem::new("creative", "Creative & Artistic", CATEGORY, "Bold, creative styling"),
        CatalogItem::new("glassmorphism", "Glassmorphism", CATEGORY, "Frosted glass effect"),
        CatalogItem::new("neumorphism", "Neumorphism", CATEGORY, "Soft, extruded plastic look"),
    ]
}

pub fn feature_categories() -> Vec<FeatureCategory> {
    vec![
        FeatureCategory::new(
            "Core Features",
            &[
                "Responsive Design",
                "Navigation Menu",
                "Contact Form",
                "Search Functionality",
                "Image Gallery",
                "Video Integration",
                "Social Media Links",
                "Newsletter Signup",
            ],
        ),
        FeatureCategory::new(
            "User Features",
            &[
                "User Registration",
                "Login/Logout",
                "User Profile",
                "Password Reset",
                "User Dashboard",
                "Account Settings",
            ],
        ),
        FeatureCategory::new(
            "Content Features",
            &[
                "Blog Section",
                "Comments System",
                "Content Management",
                "Rich Text Editor",
                "File Upload",
                "Media Library",
                "Categories & Tags",
                "Search & Filter",
            ],
        ),
        FeatureCategory::new(
            "E-commerce Features",
            &[
                "Product Catalog",
                "Shopping Cart",
                "Checkout Process",
                "Payment Integration",
                "Order Management",
                "Product Reviews",
                "Wishlist",
                "Inventory Display",
            ],
        ),
        FeatureCategory::new(
            "Advanced Features",
            &[
                "Dark/Light Mode Toggle",
                "Multi-language Support",
                "SEO Optimization",
                "Analytics Integration",
                "Performance Optimization",
                "Accessibility Features",
                "Progressive Web App",
                "Offline Support",
            ],
        ),
    ]
}

pub fn color_presets() -> Vec<ColorPreset> {
    vec![
        ColorPreset::new("Blue Ocean", ColorScheme::default()),
        ColorPreset::new(
            "Purple Magic",
            ColorScheme::new("#8B5CF6", "#7C3AED", "#EC4899", "#FAFAFA", "#374151"),
        ),
        ColorPreset::new(
            "Green Nature",
            ColorScheme::new("#10B981", "#059669", "#34D399", "#F9FAFB", "#111827"),
        ),
        ColorPreset::new(
            "Orange Sunset",
            ColorScheme::new("#F59E0B", "#D97706", "#FB923C", "#FFFBEB", "#92400E"),
        ),
        ColorPreset::new(
            "Dark Mode",
            ColorScheme::new("#6366F1", "#4F46E5", "#8B5CF6", "#111827", "#F9FAFB"),
        ),
    ]
}
