//! Interface strings for the two site languages.
//!
//! Keys form a closed set; each language has its own table. A key missing from a language's table
//! translates to the dotted key itself, so gaps show up on the page instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Value for the document `dir` attribute.
    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn toggle(self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Select one half of a bilingual field pair.
    pub fn pick<'a>(self, en: &'a str, ar: &'a str) -> &'a str {
        match self {
            Language::En => en,
            Language::Ar => ar,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    SiteName,
    SiteSlogan,
    SiteTagline,
    LangSwitch,
    Login,
    SearchPlaceholder,
    NavHome,
    NavAbout,
    NavAboutOverview,
    NavAboutVision,
    NavAboutLeadership,
    NavAboutPlan,
    NavServices,
    NavServicesFarmer,
    NavServicesVeterinary,
    NavServicesLicensing,
    NavServicesResearch,
    NavResources,
    NavResourcesPublications,
    NavResourcesStudies,
    NavResourcesGuidelines,
    NavResourcesEducational,
    NavNews,
    NavProjects,
    NavContact,
    HeroFarmerButton,
    HeroResourcesButton,
    QuickLinksServicesTitle,
    QuickLinksServicesDescription,
    QuickLinksServicesLicenses,
    QuickLinksServicesCropGuidance,
    QuickLinksServicesSupportPrograms,
    QuickLinksResourcesTitle,
    QuickLinksResourcesDescription,
    QuickLinksNewsTitle,
    QuickLinksNewsDescription,
    NewsTitle,
    NewsViewAll,
    NewsPressRelease,
    NewsEvent,
    NewsAnnouncement,
    NewsReadMore,
    NewsRegister,
    ServicesTitle,
    ServicesCropPlant,
    ServicesFisheries,
    ServicesLivestock,
    ServicesMarketing,
    ServicesViewAll,
    ResourcesTitle,
    ResourcesCategories,
    ResourcesFormats,
    ResourcesDownload,
    ResourcesWatch,
    ResourcesBrowseAll,
    DirectoryTitle,
    DirectoryDirectorates,
    DirectoryCentral,
    DirectoryCentralGov,
    DirectoryNorth,
    DirectorySouth,
    DirectorySpecialist,
    DirectoryServices,
    StatsTitle,
    StatsViewDetails,
    FooterAbout,
    FooterAboutText,
    FooterQuickLinks,
    FooterServices,
    FooterContact,
    FooterRights,
    FooterPrivacy,
    FooterTerms,
    FooterAccessibility,
    FooterSitemap,
}

impl TranslationKey {
    /// Every key.
    pub const ALL: &'static [TranslationKey] = &[
        TranslationKey::SiteName,
        TranslationKey::SiteSlogan,
        TranslationKey::SiteTagline,
        TranslationKey::LangSwitch,
        TranslationKey::Login,
        TranslationKey::SearchPlaceholder,
        TranslationKey::NavHome,
        TranslationKey::NavAbout,
        TranslationKey::NavAboutOverview,
        TranslationKey::NavAboutVision,
        TranslationKey::NavAboutLeadership,
        TranslationKey::NavAboutPlan,
        TranslationKey::NavServices,
        TranslationKey::NavServicesFarmer,
        TranslationKey::NavServicesVeterinary,
        TranslationKey::NavServicesLicensing,
        TranslationKey::NavServicesResearch,
        TranslationKey::NavResources,
        TranslationKey::NavResourcesPublications,
        TranslationKey::NavResourcesStudies,
        TranslationKey::NavResourcesGuidelines,
        TranslationKey::NavResourcesEducational,
        TranslationKey::NavNews,
        TranslationKey::NavProjects,
        TranslationKey::NavContact,
        TranslationKey::HeroFarmerButton,
        TranslationKey::HeroResourcesButton,
        TranslationKey::QuickLinksServicesTitle,
        TranslationKey::QuickLinksServicesDescription,
        TranslationKey::QuickLinksServicesLicenses,
        TranslationKey::QuickLinksServicesCropGuidance,
        TranslationKey::QuickLinksServicesSupportPrograms,
        TranslationKey::QuickLinksResourcesTitle,
        TranslationKey::QuickLinksResourcesDescription,
        TranslationKey::QuickLinksNewsTitle,
        TranslationKey::QuickLinksNewsDescription,
        TranslationKey::NewsTitle,
        TranslationKey::NewsViewAll,
        TranslationKey::NewsPressRelease,
        TranslationKey::NewsEvent,
        TranslationKey::NewsAnnouncement,
        TranslationKey::NewsReadMore,
        TranslationKey::NewsRegister,
        TranslationKey::ServicesTitle,
        TranslationKey::ServicesCropPlant,
        TranslationKey::ServicesFisheries,
        TranslationKey::ServicesLivestock,
        TranslationKey::ServicesMarketing,
        TranslationKey::ServicesViewAll,
        TranslationKey::ResourcesTitle,
        TranslationKey::ResourcesCategories,
        TranslationKey::ResourcesFormats,
        TranslationKey::ResourcesDownload,
        TranslationKey::ResourcesWatch,
        TranslationKey::ResourcesBrowseAll,
        TranslationKey::DirectoryTitle,
        TranslationKey::DirectoryDirectorates,
        TranslationKey::DirectoryCentral,
        TranslationKey::DirectoryCentralGov,
        TranslationKey::DirectoryNorth,
        TranslationKey::DirectorySouth,
        TranslationKey::DirectorySpecialist,
        TranslationKey::DirectoryServices,
        TranslationKey::StatsTitle,
        TranslationKey::StatsViewDetails,
        TranslationKey::FooterAbout,
        TranslationKey::FooterAboutText,
        TranslationKey::FooterQuickLinks,
        TranslationKey::FooterServices,
        TranslationKey::FooterContact,
        TranslationKey::FooterRights,
        TranslationKey::FooterPrivacy,
        TranslationKey::FooterTerms,
        TranslationKey::FooterAccessibility,
        TranslationKey::FooterSitemap,
    ];

    pub fn as_str(self) -> &'static str {
        use TranslationKey::*;
        match self {
            SiteName => "site.name",
            SiteSlogan => "site.slogan",
            SiteTagline => "site.tagline",
            LangSwitch => "langSwitch",
            Login => "login",
            SearchPlaceholder => "search.placeholder",
            NavHome => "nav.home",
            NavAbout => "nav.about",
            NavAboutOverview => "nav.about.overview",
            NavAboutVision => "nav.about.vision",
            NavAboutLeadership => "nav.about.leadership",
            NavAboutPlan => "nav.about.plan",
            NavServices => "nav.services",
            NavServicesFarmer => "nav.services.farmer",
            NavServicesVeterinary => "nav.services.veterinary",
            NavServicesLicensing => "nav.services.licensing",
            NavServicesResearch => "nav.services.research",
            NavResources => "nav.resources",
            NavResourcesPublications => "nav.resources.publications",
            NavResourcesStudies => "nav.resources.studies",
            NavResourcesGuidelines => "nav.resources.guidelines",
            NavResourcesEducational => "nav.resources.educational",
            NavNews => "nav.news",
            NavProjects => "nav.projects",
            NavContact => "nav.contact",
            HeroFarmerButton => "home.hero.btn.farmer",
            HeroResourcesButton => "home.hero.btn.resources",
            QuickLinksServicesTitle => "quickLinks.services.title",
            QuickLinksServicesDescription => "quickLinks.services.description",
            QuickLinksServicesLicenses => "quickLinks.services.licenses",
            QuickLinksServicesCropGuidance => "quickLinks.services.cropGuidance",
            QuickLinksServicesSupportPrograms => "quickLinks.services.supportPrograms",
            QuickLinksResourcesTitle => "quickLinks.resources.title",
            QuickLinksResourcesDescription => "quickLinks.resources.description",
            QuickLinksNewsTitle => "quickLinks.news.title",
            QuickLinksNewsDescription => "quickLinks.news.description",
            NewsTitle => "news.title",
            NewsViewAll => "news.viewAll",
            NewsPressRelease => "news.pressRelease",
            NewsEvent => "news.event",
            NewsAnnouncement => "news.announcement",
            NewsReadMore => "news.readMore",
            NewsRegister => "news.register",
            ServicesTitle => "services.title",
            ServicesCropPlant => "services.cropPlant",
            ServicesFisheries => "services.fisheries",
            ServicesLivestock => "services.livestock",
            ServicesMarketing => "services.marketing",
            ServicesViewAll => "services.viewAll",
            ResourcesTitle => "resources.title",
            ResourcesCategories => "resources.categories",
            ResourcesFormats => "resources.formats",
            ResourcesDownload => "resources.download",
            ResourcesWatch => "resources.watch",
            ResourcesBrowseAll => "resources.browseAll",
            DirectoryTitle => "directory.title",
            DirectoryDirectorates => "directory.directorates",
            DirectoryCentral => "directory.central",
            DirectoryCentralGov => "directory.centralGov",
            DirectoryNorth => "directory.north",
            DirectorySouth => "directory.south",
            DirectorySpecialist => "directory.specialist",
            DirectoryServices => "directory.services",
            StatsTitle => "stats.title",
            StatsViewDetails => "stats.viewDetails",
            FooterAbout => "footer.about",
            FooterAboutText => "footer.aboutText",
            FooterQuickLinks => "footer.quickLinks",
            FooterServices => "footer.services",
            FooterContact => "footer.contact",
            FooterRights => "footer.rights",
            FooterPrivacy => "footer.privacy",
            FooterTerms => "footer.terms",
            FooterAccessibility => "footer.accessibility",
            FooterSitemap => "footer.sitemap",
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use TranslationKey as K;

// The three quickLinks.services.* sub-entries only ever shipped in Arabic.
const EN: &[(TranslationKey, &str)] = &[
    (K::SiteName, "Palestinian Ministry of Agriculture"),
    (K::SiteSlogan, "Supporting Sustainable Agriculture in Palestine"),
    (K::SiteTagline, "Access agricultural services, resources, and support to help you thrive."),
    (K::LangSwitch, "العربية"),
    (K::Login, "Login"),
    (K::SearchPlaceholder, "Search the website..."),
    (K::NavHome, "Home"),
    (K::NavAbout, "About"),
    (K::NavAboutOverview, "Ministry Overview"),
    (K::NavAboutVision, "Vision & Mission"),
    (K::NavAboutLeadership, "Leadership"),
    (K::NavAboutPlan, "Strategic Plan"),
    (K::NavServices, "Services"),
    (K::NavServicesFarmer, "Farmer Support"),
    (K::NavServicesVeterinary, "Veterinary Services"),
    (K::NavServicesLicensing, "Licensing"),
    (K::NavServicesResearch, "Agricultural Research"),
    (K::NavResources, "Resources"),
    (K::NavResourcesPublications, "Publications"),
    (K::NavResourcesStudies, "Research Studies"),
    (K::NavResourcesGuidelines, "Guidelines"),
    (K::NavResourcesEducational, "Educational Materials"),
    (K::NavNews, "News"),
    (K::NavProjects, "Projects"),
    (K::NavContact, "Contact"),
    (K::HeroFarmerButton, "Farmer Services"),
    (K::HeroResourcesButton, "Agricultural Resources"),
    (K::QuickLinksServicesTitle, "Agricultural Services"),
    (K::QuickLinksServicesDescription, "Access licensing, permits, and support programs for farmers."),
    (K::QuickLinksResourcesTitle, "Resources & Publications"),
    (K::QuickLinksResourcesDescription, "Download guides, research, and educational materials."),
    (K::QuickLinksNewsTitle, "News & Announcements"),
    (K::QuickLinksNewsDescription, "Stay updated with the latest agricultural news and events."),
    (K::NewsTitle, "Latest News & Announcements"),
    (K::NewsViewAll, "View All"),
    (K::NewsPressRelease, "Press Release"),
    (K::NewsEvent, "Event"),
    (K::NewsAnnouncement, "Announcement"),
    (K::NewsReadMore, "Read More"),
    (K::NewsRegister, "Register"),
    (K::ServicesTitle, "Ministry Services Directory"),
    (K::ServicesCropPlant, "Crop & Plant Services"),
    (K::ServicesFisheries, "Fisheries & Aquaculture"),
    (K::ServicesLivestock, "Livestock & Veterinary Services"),
    (K::ServicesMarketing, "Marketing & Support"),
    (K::ServicesViewAll, "View All Ministry Services"),
    (K::ResourcesTitle, "Agricultural Resource Center"),
    (K::ResourcesCategories, "Resource Categories"),
    (K::ResourcesFormats, "Resource Formats"),
    (K::ResourcesDownload, "Download"),
    (K::ResourcesWatch, "Watch"),
    (K::ResourcesBrowseAll, "Browse All Resources"),
    (K::DirectoryTitle, "Ministry Directorates & Contacts"),
    (K::DirectoryDirectorates, "Directorates"),
    (K::DirectoryCentral, "Central Administration"),
    (K::DirectoryNorth, "Northern Governorates"),
    (K::DirectoryCentralGov, "Central Governorates"),
    (K::DirectorySouth, "Southern Governorates"),
    (K::DirectorySpecialist, "Specialized Units"),
    (K::DirectoryServices, "Services"),
    (K::StatsTitle, "Agricultural Sector Statistics"),
    (K::StatsViewDetails, "View Detailed Statistics"),
    (K::FooterAbout, "About the Ministry"),
    (K::FooterAboutText, "The Palestinian Ministry of Agriculture works to develop sustainable agricultural practices, support farmers, and ensure food security throughout Palestine."),
    (K::FooterQuickLinks, "Quick Links"),
    (K::FooterServices, "Services"),
    (K::FooterContact, "Contact Us"),
    (K::FooterRights, "© 2025 Palestinian Ministry of Agriculture. All rights reserved."),
    (K::FooterPrivacy, "Privacy Policy"),
    (K::FooterTerms, "Terms of Use"),
    (K::FooterAccessibility, "Accessibility"),
    (K::FooterSitemap, "Sitemap"),
];

const AR: &[(TranslationKey, &str)] = &[
    (K::SiteName, "وزارة الزراعة الفلسطينية"),
    (K::SiteSlogan, "دعم الزراعة المستدامة في فلسطين"),
    (K::SiteTagline, "الوصول إلى الخدمات الزراعية والموارد والدعم لمساعدتك على الازدهار."),
    (K::LangSwitch, "English"),
    (K::Login, "تسجيل الدخول"),
    (K::SearchPlaceholder, "البحث في الموقع..."),
    (K::NavHome, "الرئيسية"),
    (K::NavAbout, "عن الوزارة"),
    (K::NavAboutOverview, "نبذة عن الوزارة"),
    (K::NavAboutVision, "الرؤية والرسالة"),
    (K::NavAboutLeadership, "القيادة"),
    (K::NavAboutPlan, "الخطة الاستراتيجية"),
    (K::NavServices, "الخدمات"),
    (K::NavServicesFarmer, "دعم المزارعين"),
    (K::NavServicesVeterinary, "الخدمات البيطرية"),
    (K::NavServicesLicensing, "التراخيص"),
    (K::NavServicesResearch, "البحوث الزراعية"),
    (K::NavResources, "الموارد"),
    (K::NavResourcesPublications, "المنشورات"),
    (K::NavResourcesStudies, "الدراسات البحثية"),
    (K::NavResourcesGuidelines, "الإرشادات"),
    (K::NavResourcesEducational, "المواد التعليمية"),
    (K::NavNews, "الأخبار"),
    (K::NavProjects, "المشاريع"),
    (K::NavContact, "اتصل بنا"),
    (K::HeroFarmerButton, "خدمات المزارعين"),
    (K::HeroResourcesButton, "الموارد الزراعية"),
    (K::QuickLinksServicesTitle, "الخدمات الزراعية"),
    (K::QuickLinksServicesDescription, "الوصول إلى التراخيص والتصاريح وبرامج الدعم للمزارعين."),
    (K::QuickLinksServicesLicenses, "تراخيص المزارعين"),
    (K::QuickLinksServicesCropGuidance, "الإرشاد الزراعي"),
    (K::QuickLinksServicesSupportPrograms, "برامج الدعم"),
    (K::QuickLinksResourcesTitle, "الموارد والمنشورات"),
    (K::QuickLinksResourcesDescription, "تحميل الأدلة والبحوث والمواد التعليمية."),
    (K::QuickLinksNewsTitle, "الأخبار والإعلانات"),
    (K::QuickLinksNewsDescription, "ابق على اطلاع بأحدث الأخبار والفعاليات الزراعية."),
    (K::NewsTitle, "أحدث الأخبار والإعلانات"),
    (K::NewsViewAll, "عرض الكل"),
    (K::NewsPressRelease, "بيان صحفي"),
    (K::NewsEvent, "فعالية"),
    (K::NewsAnnouncement, "إعلان"),
    (K::NewsReadMore, "قراءة المزيد"),
    (K::NewsRegister, "تسجيل"),
    (K::ServicesTitle, "دليل خدمات الوزارة"),
    (K::ServicesCropPlant, "خدمات المحاصيل والنباتات"),
    (K::ServicesFisheries, "الثروة السمكية وتربية الأحياء المائية"),
    (K::ServicesLivestock, "خدمات الثروة الحيوانية والبيطرية"),
    (K::ServicesMarketing, "التسويق والدعم"),
    (K::ServicesViewAll, "عرض جميع خدمات الوزارة"),
    (K::ResourcesTitle, "مركز الموارد الزراعية"),
    (K::ResourcesCategories, "فئات الموارد"),
    (K::ResourcesFormats, "تنسيقات الموارد"),
    (K::ResourcesDownload, "تحميل"),
    (K::ResourcesWatch, "مشاهدة"),
    (K::ResourcesBrowseAll, "تصفح جميع الموارد"),
    (K::DirectoryTitle, "مديريات الوزارة والاتصالات"),
    (K::DirectoryDirectorates, "المديريات"),
    (K::DirectoryCentral, "الإدارة المركزية"),
    (K::DirectoryNorth, "المحافظات الشمالية"),
    (K::DirectoryCentralGov, "المحافظات الوسطى"),
    (K::DirectorySouth, "المحافظات الجنوبية"),
    (K::DirectorySpecialist, "الوحدات المتخصصة"),
    (K::DirectoryServices, "الخدمات"),
    (K::StatsTitle, "إحصائيات القطاع الزراعي"),
    (K::StatsViewDetails, "عرض الإحصائيات التفصيلية"),
    (K::FooterAbout, "عن الوزارة"),
    (K::FooterAboutText, "تعمل وزارة الزراعة الفلسطينية على تطوير الممارسات الزراعية المستدامة، ودعم المزارعين، وضمان الأمن الغذائي في جميع أنحاء فلسطين."),
    (K::FooterQuickLinks, "روابط سريعة"),
    (K::FooterServices, "الخدمات"),
    (K::FooterContact, "اتصل بنا"),
    (K::FooterRights, "© 2025 وزارة الزراعة الفلسطينية. جميع الحقوق محفوظة."),
    (K::FooterPrivacy, "سياسة الخصوصية"),
    (K::FooterTerms, "شروط الاستخدام"),
    (K::FooterAccessibility, "إمكانية الوصول"),
    (K::FooterSitemap, "خريطة الموقع"),
];

fn table(lang: Language) -> &'static [(TranslationKey, &'static str)] {
    match lang {
        Language::En => EN,
        Language::Ar => AR,
    }
}

/// Look up `key` for `lang`, falling back to the dotted key when the language has no entry.
pub fn translate(lang: Language, key: TranslationKey) -> &'static str {
    table(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, s)| *s)
        .unwrap_or_else(|| key.as_str())
}
