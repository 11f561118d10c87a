//! Per-locale value pools used by the built-in generators.
//!
//! Templates use `{placeholder}` slots (see [`super::pattern`]) and digit
//! patterns use `#` for any digit and `%` for a non-zero digit.

use fakecsv_core::Locale;

/// Word joining rules for free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Words separated by spaces, sentences end with `.`
    Spaced,
    /// Words run together, sentences end with `。`
    Unspaced,
}

/// Value pools for one locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleData {
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    /// Full name template (`{first}`, `{last}`)
    pub name_format: &'static str,
    /// ASCII name stems for user names and e-mail local parts
    pub ascii_names: &'static [&'static str],
    pub email_domains: &'static [&'static str],
    pub tlds: &'static [&'static str],
    pub phone_patterns: &'static [&'static str],
    pub postcode_patterns: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub states: &'static [&'static str],
    pub countries: &'static [&'static str],
    pub streets: &'static [&'static str],
    /// Address template (`{building}`, `{street}`, `{city}`, `{state}`, `{postcode}`)
    pub address_format: &'static str,
    /// Company templates (`{last}`)
    pub company_formats: &'static [&'static str],
    pub jobs: &'static [&'static str],
    pub words: &'static [&'static str],
    pub script: Script,
}

/// Pools for the given locale.
pub fn locale_data(locale: Locale) -> &'static LocaleData {
    match locale {
        Locale::EnUs => &EN_US,
        Locale::HiIn => &HI_IN,
        Locale::FrFr => &FR_FR,
        Locale::DeDe => &DE_DE,
        Locale::JaJp => &JA_JP,
    }
}

static EN_US: LocaleData = LocaleData {
    first_names: &[
        "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
        "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
        "Thomas", "Sarah", "Daniel", "Karen",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
        "Rodriguez", "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Taylor",
        "Thomas", "Moore", "Jackson", "Martin", "Lee",
    ],
    name_format: "{first} {last}",
    ascii_names: &[
        "james", "mary", "robert", "patricia", "john", "jennifer", "smith", "johnson",
        "williams", "brown", "garcia", "miller", "davis", "wilson", "taylor", "moore",
    ],
    email_domains: &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"],
    tlds: &["com", "net", "org", "info", "biz"],
    phone_patterns: &[
        "(%##) %##-####",
        "%##-%##-####",
        "+1-%##-%##-####",
        "%##.%##.####",
        "001-%##-%##-####x###",
    ],
    postcode_patterns: &["#####"],
    cities: &[
        "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
        "San Antonio", "San Diego", "Dallas", "Austin", "Jacksonville", "Columbus",
        "Charlotte", "Seattle", "Denver", "Boston",
    ],
    states: &[
        "Alabama", "Alaska", "Arizona", "California", "Colorado", "Florida", "Georgia",
        "Illinois", "Massachusetts", "Michigan", "New York", "Ohio", "Oregon", "Texas",
        "Virginia", "Washington",
    ],
    countries: &[
        "United States", "Canada", "Mexico", "Brazil", "United Kingdom", "France",
        "Germany", "India", "Japan", "Australia", "South Africa", "Argentina", "Spain",
        "Italy", "Kenya", "New Zealand",
    ],
    streets: &[
        "Main Street", "Oak Avenue", "Maple Drive", "Cedar Lane", "Pine Street",
        "Elm Street", "Washington Avenue", "Lake Road", "Hill Street", "Park Avenue",
        "Sunset Boulevard", "River Road",
    ],
    address_format: "{building} {street}, {city}, {state} {postcode}",
    company_formats: &[
        "{last} Inc",
        "{last} LLC",
        "{last} Group",
        "{last} and Sons",
        "{last}, {last} and {last}",
        "{last}-{last}",
    ],
    jobs: &[
        "Software Engineer", "Accountant", "Registered Nurse", "Teacher", "Civil Engineer",
        "Data Analyst", "Graphic Designer", "Pharmacist", "Sales Manager", "Architect",
        "Electrician", "Marketing Manager", "Lawyer", "Chef", "Librarian", "Pilot",
    ],
    words: &[
        "data", "market", "system", "people", "report", "growth", "value", "future",
        "simple", "team", "product", "service", "quality", "process", "network", "design",
        "energy", "health", "policy", "history", "model", "result", "science", "world",
    ],
    script: Script::Spaced,
};

static HI_IN: LocaleData = LocaleData {
    first_names: &[
        "आरव", "विवान", "आदित्य", "अर्जुन", "साई", "रोहन", "अनन्या", "दीया", "प्रिया",
        "सान्वी", "इशिता", "कविता", "राहुल", "अमित", "नेहा", "पूजा",
    ],
    last_names: &[
        "शर्मा", "वर्मा", "गुप्ता", "सिंह", "कुमार", "पटेल", "मिश्रा", "जोशी", "यादव",
        "अग्रवाल", "चौहान", "मेहता", "रेड्डी", "नायर",
    ],
    name_format: "{first} {last}",
    ascii_names: &[
        "aarav", "vivaan", "aditya", "arjun", "rohan", "ananya", "priya", "rahul", "amit",
        "neha", "sharma", "verma", "gupta", "singh", "kumar", "patel",
    ],
    email_domains: &["gmail.com", "yahoo.co.in", "hotmail.com", "rediffmail.com"],
    tlds: &["in", "com", "co.in", "net", "org"],
    phone_patterns: &["+91 %#########", "0%#########", "+91 %####-#####", "%#### #####"],
    postcode_patterns: &["%#####"],
    cities: &[
        "मुंबई", "दिल्ली", "बेंगलुरु", "हैदराबाद", "अहमदाबाद", "चेन्नई", "कोलकाता", "पुणे",
        "जयपुर", "लखनऊ", "कानपुर", "नागपुर", "इंदौर", "भोपाल", "पटना", "वाराणसी",
    ],
    states: &[
        "महाराष्ट्र", "उत्तर प्रदेश", "बिहार", "राजस्थान", "गुजरात", "कर्नाटक", "तमिलनाडु",
        "केरल", "पंजाब", "हरियाणा", "मध्य प्रदेश", "पश्चिम बंगाल",
    ],
    countries: &[
        "भारत", "नेपाल", "भूटान", "श्रीलंका", "बांग्लादेश", "जापान", "चीन", "फ़्रांस",
        "जर्मनी", "इटली", "ब्राज़ील", "कनाडा", "रूस", "मिस्र",
    ],
    streets: &[
        "गांधी मार्ग", "नेहरू रोड", "पटेल नगर", "शिवाजी मार्ग", "राजपथ", "स्टेशन रोड",
        "मॉल रोड", "कॉलेज रोड", "तिलक मार्ग", "सुभाष चौक",
    ],
    address_format: "{building}, {street}, {city} {postcode}",
    company_formats: &[
        "{last} प्राइवेट लिमिटेड",
        "{last} लिमिटेड",
        "{last} एंड संस",
        "{last} ग्रुप",
    ],
    jobs: &[
        "अध्यापक", "डॉक्टर", "इंजीनियर", "वकील", "लेखाकार", "नर्स", "किसान", "पत्रकार",
        "वैज्ञानिक", "प्रबंधक", "दुकानदार", "पुलिस अधिकारी",
    ],
    words: &[
        "समय", "लोग", "काम", "देश", "शहर", "जीवन", "पानी", "घर", "दुनिया", "भाषा",
        "विचार", "रास्ता", "सपना", "किताब", "बाजार", "समाज", "परिवार", "इतिहास",
    ],
    script: Script::Spaced,
};

static FR_FR: LocaleData = LocaleData {
    first_names: &[
        "Louis", "Gabriel", "Léa", "Chloé", "Hugo", "Manon", "Jules", "Camille", "Lucas",
        "Inès", "Arthur", "Zoé", "Nathan", "Élise", "Théo", "Hélène",
    ],
    last_names: &[
        "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand",
        "Leroy", "Moreau", "Simon", "Laurent", "Lefèbvre", "Michel", "Garnier", "Faure",
    ],
    name_format: "{first} {last}",
    ascii_names: &[
        "louis", "gabriel", "lea", "chloe", "hugo", "manon", "jules", "camille", "martin",
        "bernard", "dubois", "durand", "leroy", "moreau", "simon", "laurent",
    ],
    email_domains: &["orange.fr", "free.fr", "laposte.net", "gmail.com", "sfr.fr"],
    tlds: &["fr", "com", "net", "org"],
    phone_patterns: &["0# ## ## ## ##", "+33 (0)# ## ## ## ##", "+33 # ## ## ## ##", "0#########"],
    postcode_patterns: &["%####"],
    cities: &[
        "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg",
        "Montpellier", "Bordeaux", "Lille", "Rennes", "Reims", "Grenoble", "Dijon",
    ],
    states: &[
        "Île-de-France", "Bretagne", "Normandie", "Occitanie", "Grand Est",
        "Hauts-de-France", "Nouvelle-Aquitaine", "Auvergne-Rhône-Alpes",
        "Provence-Alpes-Côte d'Azur", "Pays de la Loire", "Bourgogne-Franche-Comté",
        "Centre-Val de Loire", "Corse",
    ],
    countries: &[
        "France", "Belgique", "Suisse", "Allemagne", "Espagne", "Italie", "Royaume-Uni",
        "Canada", "Maroc", "Sénégal", "Japon", "Brésil", "Inde", "États-Unis",
    ],
    streets: &[
        "rue de la Paix", "avenue Victor Hugo", "boulevard Saint-Germain",
        "rue du Faubourg", "place de la République", "rue Nationale", "chemin des Vignes",
        "rue de l'Église", "avenue Jean Jaurès", "quai de la Seine",
    ],
    address_format: "{building}, {street}, {postcode} {city}",
    company_formats: &["{last} SARL", "{last} SA", "{last} SAS", "{last} et Fils", "{last} {last} SA"],
    jobs: &[
        "Ingénieur logiciel", "Comptable", "Infirmier", "Professeur", "Boulanger",
        "Architecte", "Pharmacien", "Avocat", "Journaliste", "Cuisinier", "Électricien",
        "Bibliothécaire",
    ],
    words: &[
        "temps", "monde", "maison", "projet", "travail", "jour", "ville", "histoire",
        "pays", "idée", "valeur", "marché", "équipe", "avenir", "réseau", "service",
        "lumière", "chemin", "question", "société",
    ],
    script: Script::Spaced,
};

static DE_DE: LocaleData = LocaleData {
    first_names: &[
        "Lukas", "Leon", "Finn", "Jonas", "Paul", "Emma", "Mia", "Hannah", "Sophie",
        "Lena", "Jürgen", "Günter", "Anna", "Marie", "Felix", "Klaus",
    ],
    last_names: &[
        "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
        "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf",
    ],
    name_format: "{first} {last}",
    ascii_names: &[
        "lukas", "leon", "finn", "jonas", "paul", "emma", "mia", "hannah", "mueller",
        "schmidt", "schneider", "fischer", "weber", "meyer", "wagner", "becker",
    ],
    email_domains: &["gmx.de", "web.de", "t-online.de", "gmail.com", "posteo.de"],
    tlds: &["de", "com", "net", "org"],
    phone_patterns: &["0%## ########", "+49(0)%## #####", "0%###-#######", "+49 %## #######"],
    postcode_patterns: &["#####"],
    cities: &[
        "Berlin", "Hamburg", "München", "Köln", "Frankfurt am Main", "Stuttgart",
        "Düsseldorf", "Leipzig", "Dortmund", "Essen", "Bremen", "Dresden", "Hannover",
        "Nürnberg",
    ],
    states: &[
        "Baden-Württemberg", "Bayern", "Berlin", "Brandenburg", "Bremen", "Hamburg",
        "Hessen", "Niedersachsen", "Nordrhein-Westfalen", "Rheinland-Pfalz", "Saarland",
        "Sachsen", "Sachsen-Anhalt", "Schleswig-Holstein", "Thüringen",
    ],
    countries: &[
        "Deutschland", "Österreich", "Schweiz", "Frankreich", "Italien", "Spanien",
        "Niederlande", "Polen", "Dänemark", "Belgien", "Japan", "Indien", "Brasilien",
        "Vereinigte Staaten",
    ],
    streets: &[
        "Hauptstraße", "Schulstraße", "Gartenstraße", "Bahnhofstraße", "Dorfstraße",
        "Bergstraße", "Birkenweg", "Lindenstraße", "Kirchstraße", "Waldstraße",
        "Ringstraße", "Goethestraße",
    ],
    address_format: "{street} {building}, {postcode} {city}",
    company_formats: &["{last} GmbH", "{last} AG", "{last} KG", "{last} GmbH & Co. KG", "{last} & {last} GmbH"],
    jobs: &[
        "Softwareentwickler", "Buchhalter", "Krankenpfleger", "Lehrer", "Bäcker",
        "Architekt", "Apotheker", "Rechtsanwalt", "Journalist", "Koch", "Elektriker",
        "Bibliothekar",
    ],
    words: &[
        "Zeit", "Welt", "Haus", "Arbeit", "Stadt", "Wasser", "Leben", "Frage", "Geschichte",
        "Land", "Markt", "Zukunft", "Wert", "Netz", "Dienst", "Licht", "Weg", "Gesellschaft",
        "Idee", "Team",
    ],
    script: Script::Spaced,
};

static JA_JP: LocaleData = LocaleData {
    first_names: &[
        "翔太", "大輔", "拓也", "健太", "直樹", "陽子", "花子", "美咲", "さくら", "結衣",
        "愛", "翼", "亮", "舞", "裕太", "明美",
    ],
    last_names: &[
        "佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村", "小林", "加藤",
        "吉田", "山田", "佐々木", "山口", "松本", "井上",
    ],
    name_format: "{last} {first}",
    ascii_names: &[
        "shota", "daisuke", "takuya", "kenta", "naoki", "yoko", "hanako", "misaki",
        "sato", "suzuki", "takahashi", "tanaka", "ito", "watanabe", "yamamoto", "nakamura",
    ],
    email_domains: &["gmail.com", "yahoo.co.jp", "hotmail.co.jp", "docomo.ne.jp"],
    tlds: &["jp", "com", "co.jp", "net", "org"],
    phone_patterns: &["0%0-####-####", "090-####-####", "080-####-####", "0%-####-####"],
    postcode_patterns: &["###-####"],
    cities: &[
        "札幌市", "仙台市", "さいたま市", "千葉市", "横浜市", "川崎市", "名古屋市", "京都市",
        "大阪市", "神戸市", "広島市", "福岡市", "那覇市", "金沢市",
    ],
    states: &[
        "北海道", "青森県", "宮城県", "東京都", "神奈川県", "埼玉県", "千葉県", "愛知県",
        "京都府", "大阪府", "兵庫県", "広島県", "福岡県", "沖縄県",
    ],
    countries: &[
        "日本", "アメリカ合衆国", "カナダ", "イギリス", "フランス", "ドイツ", "イタリア",
        "中国", "韓国", "インド", "ブラジル", "オーストラリア", "タイ", "ベトナム",
    ],
    streets: &[
        "中央", "本町", "栄町", "緑町", "旭町", "桜町", "新町", "東町", "西町", "港町",
    ],
    address_format: "〒{postcode} {state}{city}{street}{building}丁目",
    company_formats: &["株式会社{last}", "有限会社{last}", "{last}合同会社", "{last}商事株式会社"],
    jobs: &[
        "ソフトウェアエンジニア", "会計士", "看護師", "教師", "建築家", "薬剤師", "弁護士",
        "記者", "料理人", "電気技師", "司書", "営業",
    ],
    words: &[
        "時間", "世界", "家", "仕事", "町", "水", "生活", "質問", "歴史", "国", "市場",
        "未来", "価値", "道", "光", "社会", "考え", "友達",
    ],
    script: Script::Unspaced,
};
