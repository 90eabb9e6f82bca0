//! Demo content loaded into a fresh `MemStorage`. Ids follow list order, starting at 1.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::model::{
    InsertDirectory, InsertNews, InsertResource, InsertService, InsertStatistic, InsertUser,
};

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

pub(super) fn users() -> Vec<InsertUser> {
    vec![InsertUser {
        username: "admin".into(),
        password: "password123".into(),
    }]
}

fn news_item(
    title: (&str, &str),
    content: (&str, &str),
    image_url: &str,
    category: &str,
    publish_date: DateTime<Utc>,
) -> InsertNews {
    InsertNews {
        title_en: title.0.into(),
        title_ar: title.1.into(),
        content_en: content.0.into(),
        content_ar: content.1.into(),
        image_url: Some(image_url.into()),
        category: category.into(),
        publish_date,
        is_published: true,
    }
}

pub(super) fn news() -> Vec<InsertNews> {
    vec![
        news_item(
            (
                "Ministry Launches New Olive Support Program",
                "وزارة الزراعة تطلق برنامج دعم جديد للزيتون",
            ),
            (
                "The Palestinian Ministry of Agriculture announced a new support program for olive farmers, aiming to improve production quality and international market access.",
                "أعلنت وزارة الزراعة الفلسطينية عن برنامج دعم جديد لمزارعي الزيتون، يهدف إلى تحسين جودة الإنتاج والوصول إلى الأسواق الدولية.",
            ),
            "https://images.unsplash.com/photo-1631819825505-4ae5383e5fa3",
            "Press Release",
            date(2025, 11, 2),
        ),
        news_item(
            (
                "Upcoming Workshop: Sustainable Farming Practices",
                "ورشة عمل قادمة: ممارسات الزراعة المستدامة",
            ),
            (
                "Join our experts for a comprehensive workshop on implementing sustainable farming practices that conserve water and improve soil health.",
                "انضم إلى خبرائنا لورشة عمل شاملة حول تنفيذ ممارسات الزراعة المستدامة التي تحافظ على المياه وتحسن صحة التربة.",
            ),
            "https://images.unsplash.com/photo-1635176502606-denafdc2a54e",
            "Event",
            date(2025, 11, 15),
        ),
        news_item(
            (
                "New Agricultural Information System Launched",
                "إطلاق نظام معلومات زراعي جديد",
            ),
            (
                "The Ministry has launched a new Integrated Agricultural Information System to provide real-time data and support to farmers across Palestine.",
                "أطلقت الوزارة نظام معلومات زراعي متكامل جديد لتوفير بيانات في الوقت الحقيقي ودعم للمزارعين في جميع أنحاء فلسطين.",
            ),
            "https://images.unsplash.com/photo-1569880153113-76e33fc52d5f",
            "Announcement",
            date(2025, 10, 30),
        ),
    ]
}

fn resource(
    title: (&str, &str),
    description: (&str, &str),
    category: &str,
    file_type: &str,
    file_url: &str,
    file_size: &str,
) -> InsertResource {
    InsertResource {
        title_en: title.0.into(),
        title_ar: title.1.into(),
        description_en: description.0.into(),
        description_ar: description.1.into(),
        category: category.into(),
        file_type: file_type.into(),
        file_url: file_url.into(),
        file_size: Some(file_size.into()),
        is_published: true,
    }
}

pub(super) fn resources() -> Vec<InsertResource> {
    vec![
        resource(
            ("Olive Cultivation Guide", "دليل زراعة الزيتون"),
            (
                "Comprehensive guide to olive farming techniques, disease prevention, and harvesting best practices.",
                "دليل شامل لتقنيات زراعة الزيتون، والوقاية من الأمراض، وأفضل ممارسات الحصاد.",
            ),
            "Farming Guides",
            "PDF",
            "/resources/olive-cultivation-guide.pdf",
            "4.2 MB",
        ),
        resource(
            ("Water Conservation Manual", "دليل الحفاظ على المياه"),
            (
                "Techniques and technologies for efficient water usage in agriculture in arid and semi-arid regions.",
                "تقنيات وتكنولوجيات للاستخدام الفعال للمياه في الزراعة في المناطق الجافة وشبه الجافة.",
            ),
            "Water Management",
            "PDF",
            "/resources/water-conservation-manual.pdf",
            "3.7 MB",
        ),
        resource(
            ("Pest Management Presentation", "عرض إدارة الآفات"),
            (
                "Educational slides on integrated pest management techniques for various crops grown in Palestine.",
                "شرائح تعليمية حول تقنيات الإدارة المتكاملة للآفات لمختلف المحاصيل المزروعة في فلسطين.",
            ),
            "Pest Control",
            "PPT",
            "/resources/pest-management-presentation.ppt",
            "8.1 MB",
        ),
        resource(
            ("Crop Calendar & Planning Tools", "تقويم المحاصيل وأدوات التخطيط"),
            (
                "Spreadsheet tools for planning seasonal planting, harvesting, and farm management activities.",
                "أدوات جداول البيانات لتخطيط الزراعة الموسمية والحصاد وأنشطة إدارة المزرعة.",
            ),
            "Farming Guides",
            "XLSX",
            "/resources/crop-calendar-tools.xlsx",
            "1.3 MB",
        ),
        resource(
            ("Greenhouse Management Video Series", "سلسلة فيديو إدارة البيوت المحمية"),
            (
                "Video tutorials on setting up and maintaining productive greenhouse operations.",
                "دروس فيديو حول إنشاء وصيانة عمليات البيوت المحمية المنتجة.",
            ),
            "Training Videos",
            "Video",
            "/resources/greenhouse-management-videos",
            "6 Episodes",
        ),
        resource(
            ("Agricultural Market Data", "بيانات سوق المنتجات الزراعية"),
            (
                "Historical price data for major agricultural products in local and international markets.",
                "بيانات الأسعار التاريخية للمنتجات الزراعية الرئيسية في الأسواق المحلية والدولية.",
            ),
            "Market Reports",
            "CSV",
            "/resources/agricultural-market-data.csv",
            "850 KB",
        ),
    ]
}

fn service(
    title: (&str, &str),
    description: (&str, &str),
    category: &str,
    icon: &str,
) -> InsertService {
    InsertService {
        title_en: title.0.into(),
        title_ar: title.1.into(),
        description_en: description.0.into(),
        description_ar: description.1.into(),
        category: category.into(),
        icon: Some(icon.into()),
        is_published: true,
    }
}

pub(super) fn services() -> Vec<InsertService> {
    const CROP: &str = "Crop & Plant Services";
    const FISH: &str = "Fisheries & Aquaculture";
    const LIVESTOCK: &str = "Livestock & Veterinary Services";
    const MARKETING: &str = "Marketing & Support";

    vec![
        service(
            ("Plant Disease Diagnosis", "تشخيص أمراض النباتات"),
            (
                "Expert assessment and treatment recommendations for crop diseases.",
                "تقييم الخبراء وتوصيات العلاج لأمراض المحاصيل.",
            ),
            CROP,
            "fa-seedling",
        ),
        service(
            ("Seed Certification", "اعتماد البذور"),
            (
                "Quality certification for seeds and planting materials.",
                "شهادة الجودة للبذور ومواد الزراعة.",
            ),
            CROP,
            "fa-seedling",
        ),
        service(
            ("Greenhouse Licensing", "ترخيص البيوت المحمية"),
            (
                "Permits and technical support for greenhouse farming.",
                "التصاريح والدعم الفني للزراعة في البيوت المحمية.",
            ),
            CROP,
            "fa-seedling",
        ),
        service(
            ("Aquaculture Licensing", "ترخيص تربية الأحياء المائية"),
            (
                "Registration and permits for fish farming operations.",
                "التسجيل والتصاريح لعمليات تربية الأسماك.",
            ),
            FISH,
            "fa-fish",
        ),
        service(
            ("Fisheries Support", "دعم مصايد الأسماك"),
            (
                "Technical assistance and resources for fishing communities.",
                "المساعدة الفنية والموارد لمجتمعات الصيد.",
            ),
            FISH,
            "fa-fish",
        ),
        service(
            ("Animal Health Services", "خدمات صحة الحيوان"),
            (
                "Vaccination programs and disease prevention for livestock.",
                "برامج التطعيم والوقاية من الأمراض للماشية.",
            ),
            LIVESTOCK,
            "fa-cow",
        ),
        service(
            ("Livestock Registration", "تسجيل الماشية"),
            (
                "Official registration and tracking of animal populations.",
                "التسجيل الرسمي وتتبع أعداد الحيوانات.",
            ),
            LIVESTOCK,
            "fa-cow",
        ),
        service(
            ("Breeding Programs", "برامج التربية"),
            (
                "Support for improving local livestock breeds and genetics.",
                "دعم تحسين سلالات الماشية المحلية والوراثة.",
            ),
            LIVESTOCK,
            "fa-cow",
        ),
        service(
            ("Export Certification", "شهادة التصدير"),
            (
                "Documentation and quality assurance for agricultural exports.",
                "التوثيق وضمان الجودة للصادرات الزراعية.",
            ),
            MARKETING,
            "fa-chart-line",
        ),
        service(
            ("Farmer Subsidies", "دعم المزارعين"),
            (
                "Financial support programs for eligible agricultural activities.",
                "برامج الدعم المالي للأنشطة الزراعية المؤهلة.",
            ),
            MARKETING,
            "fa-chart-line",
        ),
        service(
            ("Cooperative Development", "تطوير التعاونيات"),
            (
                "Support for establishing and managing agricultural cooperatives.",
                "دعم إنشاء وإدارة التعاونيات الزراعية.",
            ),
            MARKETING,
            "fa-chart-line",
        ),
    ]
}

const HOURS_EN: &str = "Sun-Thu: 8:00 AM - 3:00 PM";
const HOURS_AR: &str = "الأحد-الخميس: 8:00 صباحاً - 3:00 مساءً";

fn office(
    name: (&str, &str),
    address: (&str, &str),
    phone: &str,
    email: &str,
    services_en: &[&str],
    services_ar: &[&str],
) -> InsertDirectory {
    InsertDirectory {
        name_en: name.0.into(),
        name_ar: name.1.into(),
        region: "Central".into(),
        address_en: address.0.into(),
        address_ar: address.1.into(),
        phone: Some(phone.into()),
        email: Some(email.into()),
        hours_en: Some(HOURS_EN.into()),
        hours_ar: Some(HOURS_AR.into()),
        services_en: strings(services_en),
        services_ar: strings(services_ar),
        is_published: true,
    }
}

pub(super) fn directories() -> Vec<InsertDirectory> {
    vec![
        office(
            ("Ministry Headquarters", "المقر الرئيسي للوزارة"),
            (
                "3rd Floor, Agricultural Building, Al-Bireh, Ramallah",
                "الطابق الثالث، مبنى الزراعة، البيرة، رام الله",
            ),
            "+970 2 240 6340",
            "info@moa.gov.ps",
            &[],
            &[],
        ),
        office(
            ("Agricultural Development Department", "دائرة التنمية الزراعية"),
            (
                "2nd Floor, Agricultural Building, Al-Bireh, Ramallah",
                "الطابق الثاني، مبنى الزراعة، البيرة، رام الله",
            ),
            "+970 2 240 6343",
            "dev@moa.gov.ps",
            &["Agricultural planning", "Project coordination", "Rural development"],
            &["التخطيط الزراعي", "تنسيق المشاريع", "التنمية الريفية"],
        ),
        office(
            ("Plant Production & Protection Department", "دائرة الإنتاج النباتي والوقاية"),
            (
                "1st Floor, Agricultural Building, Al-Bireh, Ramallah",
                "الطابق الأول، مبنى الزراعة، البيرة، رام الله",
            ),
            "+970 2 240 6345",
            "plants@moa.gov.ps",
            &["Plant disease diagnosis", "Pest management", "Crop production guidance"],
            &["تشخيص أمراض النباتات", "إدارة الآفات", "توجيه إنتاج المحاصيل"],
        ),
        office(
            ("Veterinary Services Department", "دائرة الخدمات البيطرية"),
            (
                "1st Floor, Agricultural Building, Al-Bireh, Ramallah",
                "الطابق الأول، مبنى الزراعة، البيرة، رام الله",
            ),
            "+970 2 240 6347",
            "vet@moa.gov.ps",
            &["Animal health services", "Vaccination programs", "Livestock disease control"],
            &["خدمات صحة الحيوان", "برامج التطعيم", "مكافحة أمراض الماشية"],
        ),
    ]
}

fn stat(label: (&str, &str), value: &str, order: i32) -> InsertStatistic {
    InsertStatistic {
        label_en: label.0.into(),
        label_ar: label.1.into(),
        value: value.into(),
        order,
        is_published: true,
    }
}

pub(super) fn statistics() -> Vec<InsertStatistic> {
    vec![
        stat(
            ("of Palestinian land is agricultural", "من الأراضي الفلسطينية زراعية"),
            "63%",
            1,
        ),
        stat(("registered farmers", "مزارع مسجل"), "110,000", 2),
        stat(
            ("annual agricultural exports", "الصادرات الزراعية السنوية"),
            "$450M",
            3,
        ),
        stat(
            ("of GDP from agriculture", "من الناتج المحلي الإجمالي من الزراعة"),
            "12%",
            4,
        ),
    ]
}
