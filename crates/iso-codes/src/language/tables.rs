//! ISO 639 code tables.
//!
//! Three overlapping registries: ISO 639-1 (two letters), ISO 639-2/B
//! (bibliographic) and ISO 639-2/T (terminology). Every 639-1 and 639-2/B
//! code has an entry in the matching cross-reference table pointing at
//! its terminology code.

/// ISO 639-1:2002 two-letter codes.
pub(super) static ISO_639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be",
    "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs",
    "cu", "cv", "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu",
    "fa", "ff", "fi", "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha",
    "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik",
    "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn",
    "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln", "lo", "lt",
    "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb",
    "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os",
    "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd",
    "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv",
    "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw",
    "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi", "yo", "za",
    "zh", "zu",
];

/// ISO 639-2/B bibliographic codes that differ from their terminology code.
pub(super) static ISO_639_2B: &[&str] = &[
    "alb", "arm", "baq", "bur", "chi", "cze", "dut", "fre", "geo", "ger", "gre", "ice", "mac", "mao",
    "may", "per", "rum", "slo", "tib", "wel",
];

/// ISO 639-2/T terminology codes with their English reference name.
pub(super) static ISO_639_2T: &[(&str, &str)] = &[
    ("aar", "Afar"),
    ("abk", "Abkhazian"),
    ("ace", "Achinese"),
    ("ach", "Acoli"),
    ("ada", "Adangme"),
    ("ady", "Adyghe; Adygei"),
    ("afa", "Afro-Asiatic languages"),
    ("afh", "Afrihili"),
    ("afr", "Afrikaans"),
    ("ain", "Ainu"),
    ("aka", "Akan"),
    ("akk", "Akkadian"),
    ("ale", "Aleut"),
    ("alg", "Algonquian languages"),
    ("alt", "Southern Altai"),
    ("amh", "Amharic"),
    ("ang", "English, Old (ca.450-1100)"),
    ("anp", "Angika"),
    ("apa", "Apache languages"),
    ("ara", "Arabic"),
    ("arc", "Official Aramaic (700-300 BCE); Imperial Aramaic (700-300 BCE)"),
    ("arg", "Aragonese"),
    ("arn", "Mapudungun; Mapuche"),
    ("arp", "Arapaho"),
    ("art", "Artificial languages"),
    ("arw", "Arawak"),
    ("asm", "Assamese"),
    ("ast", "Asturian; Bable; Leonese"),
    ("ath", "Athapascan languages"),
    ("aus", "Australian languages"),
    ("ava", "Avaric"),
    ("ave", "Avestan"),
    ("awa", "Awadhi"),
    ("aym", "Aymara"),
    ("aze", "Azerbaijani"),
    ("bad", "Banda languages"),
    ("bai", "Bamileke languages"),
    ("bak", "Bashkir"),
    ("bal", "Baluchi"),
    ("bam", "Bambara"),
    ("ban", "Balinese"),
    ("bas", "Basa"),
    ("bat", "Baltic languages"),
    ("bej", "Beja; Bedawiyet"),
    ("bel", "Belarusian"),
    ("bem", "Bemba"),
    ("ben", "Bengali"),
    ("ber", "Berber languages"),
    ("bho", "Bhojpuri"),
    ("bih", "Bihari languages"),
    ("bik", "Bikol"),
    ("bin", "Bini; Edo"),
    ("bis", "Bislama"),
    ("bla", "Siksika"),
    ("bnt", "Bantu languages"),
    ("bod", "Tibetan"),
    ("bos", "Bosnian"),
    ("bra", "Braj"),
    ("bre", "Breton"),
    ("btk", "Batak languages"),
    ("bua", "Buriat"),
    ("bug", "Buginese"),
    ("bul", "Bulgarian"),
    ("byn", "Blin; Bilin"),
    ("cad", "Caddo"),
    ("cai", "Central American Indian languages"),
    ("car", "Galibi Carib"),
    ("cat", "Catalan; Valencian"),
    ("cau", "Caucasian languages"),
    ("ceb", "Cebuano"),
    ("cel", "Celtic languages"),
    ("ces", "Czech"),
    ("cha", "Chamorro"),
    ("chb", "Chibcha"),
    ("che", "Chechen"),
    ("chg", "Chagatai"),
    ("chk", "Chuukese"),
    ("chm", "Mari"),
    ("chn", "Chinook"),
    ("cho", "Choctaw"),
    ("chp", "Chipewyan; Dene Suline"),
    ("chr", "Cherokee"),
    ("chu", "Church Slavic; Old Slavonic; Church Slavonic; Old Bulgarian; Old Church Slavonic"),
    ("chv", "Chuvash"),
    ("chy", "Cheyenne"),
    ("cmc", "Chamic languages"),
    ("cop", "Coptic"),
    ("cor", "Cornish"),
    ("cos", "Corsican"),
    ("cpe", "Creoles and pidgins, English based"),
    ("cpf", "Creoles and pidgins, French-based"),
    ("cpp", "Creoles and pidgins, Portuguese-based"),
    ("cre", "Cree"),
    ("crh", "Crimean Tatar; Crimean Turkish"),
    ("crp", "Creoles and pidgins"),
    ("csb", "Kashubian"),
    ("cus", "Cushitic languages"),
    ("cym", "Welsh"),
    ("dak", "Dakota"),
    ("dan", "Danish"),
    ("dar", "Dargwa"),
    ("day", "Land Dayak languages"),
    ("del", "Delaware"),
    ("den", "Slave (Athapascan)"),
    ("deu", "German"),
    ("dgr", "Dogrib"),
    ("din", "Dinka"),
    ("div", "Divehi; Dhivehi; Maldivian"),
    ("doi", "Dogri"),
    ("dra", "Dravidian languages"),
    ("dsb", "Lower Sorbian"),
    ("dua", "Duala"),
    ("dum", "Dutch, Middle (ca.1050-1350)"),
    ("dyu", "Dyula"),
    ("dzo", "Dzongkha"),
    ("efi", "Efik"),
    ("egy", "Egyptian (Ancient)"),
    ("eka", "Ekajuk"),
    ("ell", "Greek, Modern (1453-)"),
    ("elx", "Elamite"),
    ("eng", "English"),
    ("enm", "English, Middle (1100-1500)"),
    ("epo", "Esperanto"),
    ("est", "Estonian"),
    ("eus", "Basque"),
    ("ewe", "Ewe"),
    ("ewo", "Ewondo"),
    ("fan", "Fang"),
    ("fao", "Faroese"),
    ("fas", "Persian"),
    ("fat", "Fanti"),
    ("fij", "Fijian"),
    ("fil", "Filipino; Pilipino"),
    ("fin", "Finnish"),
    ("fiu", "Finno-Ugrian languages"),
    ("fon", "Fon"),
    ("fra", "French"),
    ("frm", "French, Middle (ca.1400-1600)"),
    ("fro", "French, Old (842-ca.1400)"),
    ("frr", "Northern Frisian"),
    ("frs", "Eastern Frisian"),
    ("fry", "Western Frisian"),
    ("ful", "Fulah"),
    ("fur", "Friulian"),
    ("gaa", "Ga"),
    ("gay", "Gayo"),
    ("gba", "Gbaya"),
    ("gem", "Germanic languages"),
    ("gez", "Geez"),
    ("gil", "Gilbertese"),
    ("gla", "Gaelic; Scottish"),
    ("gle", "Irish"),
    ("glg", "Galician"),
    ("glv", "Manx"),
    ("gmh", "German, Middle High (ca.1050-1500)"),
    ("goh", "German, Old High (ca.750-1050)"),
    ("gon", "Gondi"),
    ("gor", "Gorontalo"),
    ("got", "Gothic"),
    ("grb", "Grebo"),
    ("grc", "Greek, Ancient (to 1453)"),
    ("grn", "Guarani"),
    ("gsw", "Swiss German; Alemannic; Alsatian"),
    ("guj", "Gujarati"),
    ("gwi", "Gwich'in"),
    ("hai", "Haida"),
    ("hat", "Haitian; Haitian Creole"),
    ("hau", "Hausa"),
    ("haw", "Hawaiian"),
    ("heb", "Hebrew"),
    ("her", "Herero"),
    ("hil", "Hiligaynon"),
    ("him", "Himachali languages; Western Pahari languages"),
    ("hin", "Hindi"),
    ("hit", "Hittite"),
    ("hmn", "Hmong; Mong"),
    ("hmo", "Hiri Motu"),
    ("hrv", "Croatian"),
    ("hsb", "Upper Sorbian"),
    ("hun", "Hungarian"),
    ("hup", "Hupa"),
    ("hye", "Armenian"),
    ("iba", "Iban"),
    ("ibo", "Igbo"),
    ("ido", "Ido"),
    ("iii", "Sichuan Yi; Nuosu"),
    ("ijo", "Ijo languages"),
    ("iku", "Inuktitut"),
    ("ile", "Interlingue; Occidental"),
    ("ilo", "Iloko"),
    ("ina", "Interlingua (International Auxiliary Language Association)"),
    ("inc", "Indic languages"),
    ("ind", "Indonesian"),
    ("ine", "Indo-European languages"),
    ("inh", "Ingush"),
    ("ipk", "Inupiaq"),
    ("ira", "Iranian languages"),
    ("iro", "Iroquoian languages"),
    ("isl", "Icelandic"),
    ("ita", "Italian"),
    ("jav", "Javanese"),
    ("jbo", "Lojban"),
    ("jpn", "Japanese"),
    ("jpr", "Judeo-Persian"),
    ("jrb", "Judeo-Arabic"),
    ("kaa", "Kara-Kalpak"),
    ("kab", "Kabyle"),
    ("kac", "Kachin; Jingpho"),
    ("kal", "Kalaallisut; Greenlandic"),
    ("kam", "Kamba"),
    ("kan", "Kannada"),
    ("kar", "Karen languages"),
    ("kas", "Kashmiri"),
    ("kat", "Georgian"),
    ("kau", "Kanuri"),
    ("kaw", "Kawi"),
    ("kaz", "Kazakh"),
    ("kbd", "Kabardian"),
    ("kha", "Khasi"),
    ("khi", "Khoisan"),
    ("khm", "Central"),
    ("kho", "Khotanese; Sakan"),
    ("kik", "Kikuyu; Gikuyu"),
    ("kin", "Kinyarwanda"),
    ("kir", "Kirghiz; Kyrgyz"),
    ("kmb", "Kimbundu"),
    ("kok", "Konkani"),
    ("kom", "Komi"),
    ("kon", "Kongo"),
    ("kor", "Korean"),
    ("kos", "Kosraean"),
    ("kpe", "Kpelle"),
    ("krc", "Karachay-Balkar"),
    ("krl", "Karelian"),
    ("kro", "Kru languages"),
    ("kru", "Kurukh"),
    ("kua", "Kuanyama; Kwanyama"),
    ("kum", "Kumyk"),
    ("kur", "Kurdish"),
    ("kut", "Kutenai"),
    ("lad", "Ladino"),
    ("lah", "Lahnda"),
    ("lam", "Lamba"),
    ("lao", "Lao"),
    ("lat", "Latin"),
    ("lav", "Latvian"),
    ("lez", "Lezghian"),
    ("lim", "Limburgan; Limburger; Limburgish"),
    ("lin", "Lingala"),
    ("lit", "Lithuanian"),
    ("lol", "Mongo"),
    ("loz", "Lozi"),
    ("ltz", "Luxembourgish; Letzeburgesch"),
    ("lua", "Luba-Lulua"),
    ("lub", "Luba-Katanga"),
    ("lug", "Ganda"),
    ("lui", "Luiseno"),
    ("lun", "Lunda"),
    ("luo", "Luo (Kenya and Tanzania)"),
    ("lus", "Lushai"),
    ("mad", "Madurese"),
    ("mag", "Magahi"),
    ("mah", "Marshallese"),
    ("mai", "Maithili"),
    ("mak", "Makasar"),
    ("mal", "Malayalam"),
    ("man", "Mandingo"),
    ("map", "Austronesian languages"),
    ("mar", "Marathi"),
    ("mas", "Masai"),
    ("mdf", "Moksha"),
    ("mdr", "Mandar"),
    ("men", "Mende"),
    ("mga", "Irish, Middle (900-1200)"),
    ("mic", "Mi'kmaq; Micmac"),
    ("min", "Minangkabau"),
    ("mis", "Uncoded languages"),
    ("mkd", "Macedonian"),
    ("mkh", "Mon-Khmer languages"),
    ("mlg", "Malagasy"),
    ("mlt", "Maltese"),
    ("mnc", "Manchu"),
    ("mni", "Manipuri"),
    ("mno", "Manobo languages"),
    ("moh", "Mohawk"),
    ("mon", "Mongolian"),
    ("mos", "Mossi"),
    ("mri", "Maori"),
    ("msa", "Malay"),
    ("mul", "Multiple languages"),
    ("mun", "Munda languages"),
    ("mus", "Creek"),
    ("mwl", "Mirandese"),
    ("mwr", "Marwari"),
    ("mya", "Burmese"),
    ("myn", "Mayan languages"),
    ("myv", "Erzya"),
    ("nah", "Nahuatl languages"),
    ("nai", "North American Indian languages"),
    ("nap", "Neapolitan"),
    ("nau", "Nauru"),
    ("nav", "Navajo; Navaho"),
    ("nbl", "Ndebele, South; South Ndebele"),
    ("nde", "Ndebele, North; North Ndebele"),
    ("ndo", "Ndonga"),
    ("nds", "Low German; Low Saxon; German, Low; Saxon, Low"),
    ("nep", "Nepali"),
    ("new", "Nepal Bhasa; Newari"),
    ("nia", "Nias"),
    ("nic", "Niger-Kordofanian languages"),
    ("niu", "Niuean"),
    ("nld", "Dutch; Flemish"),
    ("nno", "Norwegian Nynorsk; Nynorsk, Norwegian"),
    ("nob", "Bokmål, Norwegian; Norwegian Bokmål"),
    ("nog", "Nogai"),
    ("non", "Norse, Old"),
    ("nor", "Norwegian"),
    ("nqo", "N'Ko"),
    ("nso", "Pedi; Sepedi; Northern Sotho"),
    ("nub", "Nubian languages"),
    ("nwc", "Classical Newari; Old Newari; Classical Nepal Bhasa"),
    ("nya", "Chichewa; Chewa; Nyanja"),
    ("nym", "Nyamwezi"),
    ("nyn", "Nyankole"),
    ("nyo", "Nyoro"),
    ("nzi", "Nzima"),
    ("oci", "Occitan (post 1500)"),
    ("oji", "Ojibwa"),
    ("ori", "Oriya"),
    ("orm", "Oromo"),
    ("osa", "Osage"),
    ("oss", "Ossetian; Ossetic"),
    ("ota", "Turkish, Ottoman (1500-1928)"),
    ("oto", "Otomian languages"),
    ("paa", "Papuan languages"),
    ("pag", "Pangasinan"),
    ("pal", "Pahlavi"),
    ("pam", "Pampanga; Kapampangan"),
    ("pan", "Panjabi; Punjabi"),
    ("pap", "Papiamento"),
    ("pau", "Palauan"),
    ("peo", "Persian, Old (ca.600-400 B.C.)"),
    ("phi", "Philippine languages"),
    ("phn", "Phoenician"),
    ("pli", "Pali"),
    ("pol", "Polish"),
    ("pon", "Pohnpeian"),
    ("por", "Portuguese"),
    ("pra", "Prakrit languages"),
    ("pro", "Provençal, Old (to 1500);Occitan, Old (to 1500)"),
    ("pus", "Pushto; Pashto"),
    ("qaa", "Reserved for local use"),
    ("que", "Quechua"),
    ("raj", "Rajasthani"),
    ("rap", "Rapanui"),
    ("rar", "Rarotongan; Cook Islands Maori"),
    ("roa", "Romance languages"),
    ("roh", "Romansh"),
    ("rom", "Romany"),
    ("ron", "Romanian; Moldavian; Moldovan"),
    ("run", "Rundi"),
    ("rup", "Aromanian; Arumanian; Macedo-Romanian"),
    ("rus", "Russian"),
    ("sad", "Sandawe"),
    ("sag", "Sango"),
    ("sah", "Yakut"),
    ("sai", "South American Indian languages"),
    ("sal", "Salishan languages"),
    ("sam", "Samaritan Aramaic"),
    ("san", "Sanskrit"),
    ("sas", "Sasak"),
    ("sat", "Santali"),
    ("scn", "Sicilian"),
    ("sco", "Scots"),
    ("sel", "Selkup"),
    ("sem", "Semitic languages"),
    ("sga", "Irish, Old (to 900)"),
    ("sgn", "Sign Languages"),
    ("shn", "Shan"),
    ("sid", "Sidamo"),
    ("sin", "Sinhala; Sinhalese"),
    ("sio", "Siouan languages"),
    ("sit", "Sino-Tibetan languages"),
    ("sla", "Slavic languages"),
    ("slk", "Slovak"),
    ("slv", "Slovenian"),
    ("sma", "Southern Sami"),
    ("sme", "Northern Sami"),
    ("smi", "Sami languages"),
    ("smj", "Lule Sami"),
    ("smn", "Inari Sami"),
    ("smo", "Samoan"),
    ("sms", "Skolt Sami"),
    ("sna", "Shona"),
    ("snd", "Sindhi"),
    ("snk", "Soninke"),
    ("sog", "Sogdian"),
    ("som", "Somali"),
    ("son", "Songhai languages"),
    ("sot", "Sotho, Southern"),
    ("spa", "Spanish; Castilian"),
    ("sqi", "Albanian"),
    ("srd", "Sardinian"),
    ("srn", "Sranan Tongo"),
    ("srp", "Serbian"),
    ("srr", "Serer"),
    ("ssa", "Nilo-Saharan languages"),
    ("ssw", "Swati"),
    ("suk", "Sukuma"),
    ("sun", "Sundanese"),
    ("sus", "Susu"),
    ("sux", "Sumerian"),
    ("swa", "Swahili"),
    ("swe", "Swedish"),
    ("syc", "Classical Syriac"),
    ("syr", "Syriac"),
    ("tah", "Tahitian"),
    ("tai", "Tai languages"),
    ("tam", "Tamil"),
    ("tat", "Tatar"),
    ("tel", "Telugu"),
    ("tem", "Timne"),
    ("ter", "Tereno"),
    ("tet", "Tetum"),
    ("tgk", "Tajik"),
    ("tgl", "Tagalog"),
    ("tha", "Thai"),
    ("tig", "Tigre"),
    ("tir", "Tigrinya"),
    ("tiv", "Tiv"),
    ("tkl", "Tokelau"),
    ("tlh", "Klingon; tlhIngan-Hol"),
    ("tli", "Tlingit"),
    ("tmh", "Tamashek"),
    ("tog", "Tonga (Nyasa)"),
    ("ton", "Tonga (Tonga Islands)"),
    ("tpi", "Tok Pisin"),
    ("tsi", "Tsimshian"),
    ("tsn", "Tswana"),
    ("tso", "Tsonga"),
    ("tuk", "Turkmen"),
    ("tum", "Tumbuka"),
    ("tup", "Tupi"),
    ("tur", "Turkish"),
    ("tut", "Altaic"),
    ("tvl", "Tuvalu"),
    ("twi", "Twi"),
    ("tyv", "Tuvinian"),
    ("udm", "Udmurt"),
    ("uga", "Ugaritic"),
    ("uig", "Uighur; Uyghur"),
    ("ukr", "Ukrainian"),
    ("umb", "Umbundu"),
    ("und", "Undetermined"),
    ("urd", "Urdu"),
    ("uzb", "Uzbek"),
    ("vai", "Vai"),
    ("ven", "Venda"),
    ("vie", "Vietnamese"),
    ("vol", "Volapük"),
    ("vot", "Votic"),
    ("wak", "Wakashan languages"),
    ("wal", "Wolaitta; Wolaytta"),
    ("war", "Waray"),
    ("was", "Washo"),
    ("wen", "Sorbian languages"),
    ("wln", "Walloon"),
    ("wol", "Wolof"),
    ("xal", "Kalmyk; Oirat"),
    ("xho", "Xhosa"),
    ("yao", "Yao"),
    ("yap", "Yapese"),
    ("yid", "Yiddish"),
    ("yor", "Yoruba"),
    ("ypk", "Yupik languages"),
    ("zap", "Zapotec"),
    ("zbl", "Blissymbols; Blissymbolics; Bliss"),
    ("zen", "Zenaga"),
    ("zgh", "Standard Moroccan Tamazight"),
    ("zha", "Zhuang; Chuang"),
    ("zho", "Chinese"),
    ("znd", "Zande languages"),
    ("zul", "Zulu"),
    ("zun", "Zuni"),
    ("zxx", "No linguistic content; Not applicable"),
    ("zza", "Zaza; Dimili; Dimli; Kirdki; Kirmanjki; Zazaki"),
];

/// ISO 639-1 to ISO 639-2/T.
pub(super) static ISO_639_1_TO_2T: &[(&str, &str)] = &[
    ("aa", "aar"), ("ab", "abk"), ("ae", "ave"), ("af", "afr"), ("ak", "aka"), ("am", "amh"),
    ("an", "arg"), ("ar", "ara"), ("as", "asm"), ("av", "ava"), ("ay", "aym"), ("az", "aze"),
    ("ba", "bak"), ("be", "bel"), ("bg", "bul"), ("bh", "bih"), ("bi", "bis"), ("bm", "bam"),
    ("bn", "ben"), ("bo", "bod"), ("br", "bre"), ("bs", "bos"), ("ca", "cat"), ("ce", "che"),
    ("ch", "cha"), ("co", "cos"), ("cr", "cre"), ("cs", "ces"), ("cu", "chu"), ("cv", "chv"),
    ("cy", "cym"), ("da", "dan"), ("de", "deu"), ("dv", "div"), ("dz", "dzo"), ("ee", "ewe"),
    ("el", "ell"), ("en", "eng"), ("eo", "epo"), ("es", "spa"), ("et", "est"), ("eu", "eus"),
    ("fa", "fas"), ("ff", "ful"), ("fi", "fin"), ("fj", "fij"), ("fo", "fao"), ("fr", "fra"),
    ("fy", "fry"), ("ga", "gle"), ("gd", "gla"), ("gl", "glg"), ("gn", "grn"), ("gu", "guj"),
    ("gv", "glv"), ("ha", "hau"), ("he", "heb"), ("hi", "hin"), ("ho", "hmo"), ("hr", "hrv"),
    ("ht", "hat"), ("hu", "hun"), ("hy", "hye"), ("hz", "her"), ("ia", "ina"), ("id", "ind"),
    ("ie", "ile"), ("ig", "ibo"), ("ii", "iii"), ("ik", "ipk"), ("io", "ido"), ("is", "isl"),
    ("it", "ita"), ("iu", "iku"), ("ja", "jpn"), ("jv", "jav"), ("ka", "kat"), ("kg", "kon"),
    ("ki", "kik"), ("kj", "kua"), ("kk", "kaz"), ("kl", "kal"), ("km", "khm"), ("kn", "kan"),
    ("ko", "kor"), ("kr", "kau"), ("ks", "kas"), ("ku", "kur"), ("kv", "kom"), ("kw", "cor"),
    ("ky", "kir"), ("la", "lat"), ("lb", "ltz"), ("lg", "lug"), ("li", "lim"), ("ln", "lin"),
    ("lo", "lao"), ("lt", "lit"), ("lu", "lub"), ("lv", "lav"), ("mg", "mlg"), ("mh", "mah"),
    ("mi", "mri"), ("mk", "mkd"), ("ml", "mal"), ("mn", "mon"), ("mr", "mar"), ("ms", "msa"),
    ("mt", "mlt"), ("my", "mya"), ("na", "nau"), ("nb", "nob"), ("nd", "nde"), ("ne", "nep"),
    ("ng", "ndo"), ("nl", "nld"), ("nn", "nno"), ("no", "nor"), ("nr", "nbl"), ("nv", "nav"),
    ("ny", "nya"), ("oc", "oci"), ("oj", "oji"), ("om", "orm"), ("or", "ori"), ("os", "oss"),
    ("pa", "pan"), ("pi", "pli"), ("pl", "pol"), ("ps", "pus"), ("pt", "por"), ("qu", "que"),
    ("rm", "roh"), ("rn", "run"), ("ro", "ron"), ("ru", "rus"), ("rw", "kin"), ("sa", "san"),
    ("sc", "srd"), ("sd", "snd"), ("se", "sme"), ("sg", "sag"), ("si", "sin"), ("sk", "slk"),
    ("sl", "slv"), ("sm", "smo"), ("sn", "sna"), ("so", "som"), ("sq", "sqi"), ("sr", "srp"),
    ("ss", "ssw"), ("st", "sot"), ("su", "sun"), ("sv", "swe"), ("sw", "swa"), ("ta", "tam"),
    ("te", "tel"), ("tg", "tgk"), ("th", "tha"), ("ti", "tir"), ("tk", "tuk"), ("tl", "tgl"),
    ("tn", "tsn"), ("to", "ton"), ("tr", "tur"), ("ts", "tso"), ("tt", "tat"), ("tw", "twi"),
    ("ty", "tah"), ("ug", "uig"), ("uk", "ukr"), ("ur", "urd"), ("uz", "uzb"), ("ve", "ven"),
    ("vi", "vie"), ("vo", "vol"), ("wa", "wln"), ("wo", "wol"), ("xh", "xho"), ("yi", "yid"),
    ("yo", "yor"), ("za", "zha"), ("zh", "zho"), ("zu", "zul"),
];

/// ISO 639-2/B to ISO 639-2/T.
pub(super) static ISO_639_2B_TO_2T: &[(&str, &str)] = &[
    ("alb", "sqi"), ("arm", "hye"), ("baq", "eus"), ("bur", "mya"), ("chi", "zho"), ("cze", "ces"),
    ("dut", "nld"), ("fre", "fra"), ("geo", "kat"), ("ger", "deu"), ("gre", "ell"), ("ice", "isl"),
    ("mac", "mkd"), ("mao", "mri"), ("may", "msa"), ("per", "fas"), ("rum", "ron"), ("slo", "slk"),
    ("tib", "bod"), ("wel", "cym"),
];
