//! Static game tables
//!
//! Difficulty levels, map sizes, victory types, advanced game options and the
//! civilizations the decoder can recognize from their first city. Replays
//! only store numeric ids; these tables give them names.

use crate::locale::Language::*;
use crate::locale::Localized;

/// Advanced option id for "No City Razing"
pub const OPTION_NO_RAZING: i32 = 0;
/// Advanced option id for "One-City Challenge"
pub const OPTION_ONE_CITY_CHALLENGE: i32 = 5;

/// Colours used for tiles owned by city-states (border, fill)
pub const CITY_STATE_COLORS: (&str, &str) = ("#dddddd", "black");

/// Map size entry with its default dimensions
#[derive(Debug, Clone, Copy)]
pub struct MapSize {
    pub name: Localized,
    pub width: i32,
    pub height: i32,
}

/// A civilization recognizable from its capital's name
#[derive(Debug, Clone, Copy)]
pub struct KnownCiv {
    pub name: Localized,
    pub capital: Localized,
    pub border: &'static str,
    pub fill: &'static str,
}

/// Difficulty levels, indexed by the header's difficulty id
pub static DIFFICULTIES: [Localized; 8] = [
    Localized::new("Settler", &[(Fr, "Colon"), (De, "Siedler"), (Es, "Colono"), (It, "Colono"), (Ko, "개척자"), (Pl, "Osadnik")]),
    Localized::new("Chieftain", &[(Fr, "Chef tribal"), (De, "Häuptling"), (Es, "Jefe"), (It, "Capitano"), (Ko, "족장"), (Pl, "Wódz")]),
    Localized::new("Warlord", &[(Fr, "Seigneur"), (De, "Kriegsherr"), (Es, "Caudillo"), (It, "Condottiero"), (Ko, "대장군"), (Pl, "Watażka")]),
    Localized::new("Prince", &[(Fr, "Prince"), (De, "Prinz"), (Es, "Príncipe"), (It, "Principe"), (Ko, "왕자"), (Pl, "Książę")]),
    Localized::new("King", &[(Fr, "Roi"), (De, "König"), (Es, "Rey"), (It, "Re"), (Ko, "왕"), (Pl, "Król")]),
    Localized::new("Emperor", &[(Fr, "Empereur"), (De, "Kaiser"), (Es, "Emperador"), (It, "Imperatore"), (Ko, "황제"), (Pl, "Imperator")]),
    Localized::new("Immortal", &[(Fr, "Immortel"), (De, "Unsterblicher"), (Es, "Inmortal"), (It, "Immortale"), (Ko, "불멸자"), (Pl, "Nieśmiertelny")]),
    Localized::new("Deity", &[(Fr, "Divinité"), (De, "Gottheit"), (Es, "Deidad"), (It, "Divinità"), (Ko, "신"), (Pl, "Bóstwo")]),
];

/// Map sizes, indexed by the header's map size id
pub static MAP_SIZES: [MapSize; 6] = [
    MapSize { name: Localized::new("Duel", &[(Fr, "Duel"), (De, "Duell"), (Es, "Duelo"), (It, "Duello"), (Ko, "일대일"), (Pl, "Pojedynkowa")]), width: 40, height: 24 },
    MapSize { name: Localized::new("Tiny", &[(Fr, "Minuscule"), (De, "Winzig"), (Es, "Diminuto"), (It, "Minuscola"), (Ko, "초소형"), (Pl, "Miniaturowa")]), width: 56, height: 36 },
    MapSize { name: Localized::new("Small", &[(Fr, "Petite"), (De, "Klein"), (Es, "Pequeño"), (It, "Piccola"), (Ko, "소형"), (Pl, "Mała")]), width: 66, height: 42 },
    MapSize { name: Localized::new("Standard", &[(Fr, "Normale"), (De, "Standard"), (Es, "Estándar"), (It, "Normale"), (Ko, "기본"), (Pl, "Zwykła")]), width: 80, height: 52 },
    MapSize { name: Localized::new("Large", &[(Fr, "Grande"), (De, "Groß"), (Es, "Grande"), (It, "Grande"), (Ko, "대형"), (Pl, "Duża")]), width: 104, height: 64 },
    MapSize { name: Localized::new("Huge", &[(Fr, "Immense"), (De, "Riesig"), (Es, "Enorme"), (It, "Enorme"), (Ko, "초대형"), (Pl, "Ogromna")]), width: 128, height: 80 },
];

/// Victory outcomes keyed by id; -1 is a loss
pub static VICTORY_TYPES: [(i32, Localized); 6] = [
    (-1, Localized::new("Loss", &[(Fr, "Défaite"), (De, "Niederlage"), (Es, "Derrota"), (It, "Sconfitta"), (Ko, "손실"), (Pl, "Porażka")])),
    (0, Localized::new("Time", &[(Fr, "Temps"), (De, "Zeit"), (Es, "Victoria por tiempo"), (It, "A tempo"), (Ko, "시간"), (Pl, "Czasowe")])),
    (1, Localized::new("Science", &[(Fr, "Scientifique"), (De, "Wissenschaft"), (Es, "Ciencia"), (It, "Scienza"), (Ko, "과학"), (Pl, "Naukowe")])),
    (2, Localized::new("Domination", &[(Fr, "Militaire"), (De, "Herrschaft"), (Es, "Victoria por dominación"), (It, "Per Dominazione"), (Ko, "정복"), (Pl, "Dominacja")])),
    (3, Localized::new("Cultural", &[(Fr, "Culturelle"), (De, "Kultur"), (Es, "Victoria cultural"), (It, "Culturale"), (Ko, "문화"), (Pl, "Kulturowe")])),
    (4, Localized::new("Diplomatic", &[(Fr, "Diplomatique"), (De, "Diplomatie"), (Es, "Victoria diplomática"), (It, "Diplomatica"), (Ko, "외교"), (Pl, "Dyplomatyczne")])),
];

/// Advanced game options, indexed by option id
pub static GAME_OPTIONS: [Localized; 21] = [
    Localized::new("No City Razing", &[(Fr, "Impossible de raser les villes"), (De, "Keine Stadtvernichtung"), (Es, "Sin arrasar ciudades"), (It, "Nessuna possibilità di razziare le città"), (Ko, "도시 파괴 불가"), (Pl, "Bez niszczenia miast")]),
    Localized::new("No Barbarians", &[(Fr, "Aucun barbare"), (De, "Keine Barbaren"), (Es, "Sin bárbaros"), (It, "No barbari"), (Ko, "야만인 없음"), (Pl, "Bez barbarzyńców")]),
    Localized::new("Raging Barbarians", &[(Fr, "Barbares déchaînés"), (De, "Wütende Barbaren"), (Es, "Bárbaros coléricos"), (It, "Barbari furiosi"), (Ko, "야만인 부흥"), (Pl, "Inwazja barbarzyńców")]),
    Localized::new("Always War", &[(Fr, "Guerre constante"), (De, "Immer Krieg"), (Es, "Siempre en guerra"), (It, "Sempre in guerra"), (Ko, "항상 전쟁 상태"), (Pl, "Permanentna wojna")]),
    Localized::new("Always Peace", &[(Fr, "Paix constante"), (De, "Immer Frieden"), (Es, "Siempre en paz"), (It, "Sempre in pace"), (Ko, "항상 평화 상태"), (Pl, "Wieczny pokój")]),
    Localized::new("One-City Challenge", &[(Fr, "Ville unique"), (De, "Einzelstadt-Wettkampf"), (Es, "Reto de una sola ciudad"), (It, "Sfida con una singola città"), (Ko, "단일 도시로 도전"), (Pl, "Starcie pojedynczych miast")]),
    Localized::new("Permanent War or Peace", &[(Fr, "Aucun changement guerre - paix"), (De, "Ständiger Krieg oder Frieden"), (Es, "Guerra o paz permanentes"), (It, "Guerra o pace permanenti"), (Ko, "영구적 전쟁 또는 평화"), (Pl, "Permanentna wojna lub pokój")]),
    Localized::new("New Random Seed", &[(Fr, "Nouvelles valeurs aléatoires"), (De, "Zufallsgenerator"), (Es, "Nuevo valor de origen al azar"), (It, "Nuovo seme casuale"), (Ko, "무작위 시드"), (Pl, "Losowa kalkulacja obrażeń")]),
    Localized::new("Lock Mods", &[(Fr, "Verrouiller les mods"), (De, "Mods sperren"), (Es, "Bloquear \"mods\""), (It, "Blocca Mod"), (Ko, "모드 잠금"), (Pl, "Blokada modów")]),
    Localized::new("Complete Kills", &[(Fr, "Destruction totale"), (De, "Komplette Vernichtung"), (Es, "Destrucción total"), (It, "Sterminio completo"), (Ko, "전멸전"), (Pl, "Pełna eliminacja")]),
    Localized::new("No Ancient Ruins", &[(Fr, "Pas de ruines antiques"), (De, "Keine Alten Ruinen"), (Es, "Sin Ruinas antiguas"), (It, "Nessuna Antica rovina"), (Ko, "고대 유적 없음"), (Pl, "Bez starożytnych ruin")]),
    Localized::new("Random Personalities", &[(Fr, "Personnalités aléatoires"), (De, "Zufällige Persönlichkeiten"), (Es, "Personalidades al azar"), (It, "Personalità casuale"), (Ko, "무작위 특성"), (Pl, "Losowe usposobienie")]),
    Localized::new("Allow Policy Saving", &[(Fr, "Autoriser l'économie de doctrines"), (De, "Ermöglicht das Speichern von Sozialpolitiken"), (Es, "Permitir guardarse política"), (It, "Permetti l'accumulo di Politiche"), (Ko, "정책 저장 허용"), (Pl, "Zezwalaj na zapisy z pol. społ.")]),
    Localized::new("Allow Promotion Saving", &[(Fr, "Autoriser l'économie de promotions"), (De, "Ermöglicht das Speichern von Beförderungen"), (Es, "Permitir guardarse ascenso"), (It, "Permetti l'accumulo di promozioni"), (Ko, "승급 저장 허용"), (Pl, "Zezwalaj na zapisy z awansem")]),
    Localized::new("Enable Turn Timer", &[(Fr, "Active le chrono. tour"), (De, "Rundenzähler aktivieren"), (Es, "Activa el contador del turno "), (It, "Attiva il timer dei turni "), (Ko, "턴 타이머 사용"), (Pl, "Włącz stoper")]),
    Localized::new("Quick Combat", &[(Fr, "Combat rapide"), (De, "Schneller Kampf"), (Es, "Combate rápido"), (It, "Combattimento rapido"), (Ko, "빠른 전투"), (Pl, "Szybka walka")]),
    Localized::new("Disable Start Bias", &[(Fr, "Désactiver les préférences de départ"), (De, "Keine Startvorgaben"), (Es, "Desactivar disposición inicial"), (It, "Disattiva posizionamento iniziale intelligente"), (Ko, "무작위 시작 위치"), (Pl, "Start z losowym rozmieszczeniem")]),
    Localized::new("Disable Research", &[(Fr, "Désactiver recherches"), (De, "Forschung ausschalten"), (Es, "Desactivar investigación"), (It, "Disattiva la Ricerca"), (Ko, "연구 비활성화"), (Pl, "Wyłącz badania")]),
    Localized::new("Disable Happiness", &[(Fr, "Désactiver bonheur"), (De, "Zufriedenheit ausschalten"), (Es, "Desactivar Felicidad"), (It, "Disattiva la Felicità"), (Ko, "행복 비활성화"), (Pl, "Wyłącz zadowolenie")]),
    Localized::new("Disable Policies", &[(Fr, "Désactiver doctrines"), (De, "Politiken ausschalten"), (Es, "Desactivar políticas"), (It, "Disattiva le Politiche"), (Ko, "정책 비활성화"), (Pl, "Wyłącz ustroje")]),
    Localized::new("Disable Tutorial Popups", &[(Fr, "Désactiver la fonction didacticiel"), (De, "Tutorial-Popups deaktivieren"), (Es, "Desactivar tutoriales"), (It, "Disattiva i tutorial pop-up"), (Ko, "튜토리얼 팝업창 해제"), (Pl, "Wyłącz pojawianie się podpowiedzi samouczka")]),
];

/// Civilizations with their capitals and colours
pub static KNOWN_CIVS: [KnownCiv; 24] = [
    KnownCiv {
        name: Localized::new("American Empire", &[(Fr, "Empire américain"), (De, "Amerikanisches Reich"), (Es, "Imperio Estadounidense"), (It, "Impero Americano"), (Ko, "미국 제국"), (Pl, "Imperium amerykańskie"), (Ja, "アメリカ文明")]),
        capital: Localized::new("Washington", &[(Fr, "Washington"), (De, "Washington"), (Es, "Washington"), (It, "Washington"), (Ko, "워싱턴"), (Pl, "Waszyngton"), (Ja, "ワシントン"), (Ru, "Вашингтон")]),
        border: "#ffffff",
        fill: "#1f3378",
    },
    KnownCiv {
        name: Localized::new("Arabian Empire", &[(Fr, "Empire arabe"), (De, "Arabisches Reich"), (Es, "Imperio Árabe"), (It, "Impero Arabo"), (Ko, "아라비아 제국"), (Pl, "Imperium arabskie")]),
        capital: Localized::new("Mecca", &[(Fr, "La Mecque"), (De, "Mekka"), (Es, "La Meca"), (It, "Mecca"), (Ko, "메카"), (Pl, "Mekka"), (Ja, "メッカ"), (Ru, "Мекка")]),
        border: "#92dd09",
        fill: "#2b572d",
    },
    KnownCiv {
        name: Localized::new("Aztec Empire", &[(Fr, "Empire aztèque"), (De, "Aztekenreich"), (Es, "Imperio Azteca"), (It, "Impero Azteco"), (Ko, "아즈텍 제국"), (Pl, "Imperium Azteckie"), (Ru, "Ацтекская империя")]),
        capital: Localized::new("Tenochtitlan", &[(Fr, "Tenochtitlan"), (De, "Tenochtitlan"), (Es, "Tenochtitlán"), (It, "Tenochtitlan"), (Ko, "테노치티틀란"), (Pl, "Tenochtitlan"), (Ja, "テノチティタラン"), (Ru, "Теночтитлан")]),
        border: "#88eed4",
        fill: "#a13922",
    },
    KnownCiv {
        name: Localized::new("Chinese Empire", &[(Fr, "Empire chinois"), (De, "Chinesisches Kaiserreich"), (Es, "Imperio Chino"), (It, "Impero Cinese"), (Ko, "중국 제국"), (Pl, "Cesarstwo chińskie"), (Ja, "中国文明"), (Ru, "Китай")]),
        capital: Localized::new("Beijing", &[(Fr, "Pékin"), (De, "Peking"), (Es, "Pekín"), (It, "Pechino"), (Ko, "북경"), (Pl, "Pekin"), (Ja, "北京"), (Ru, "Пекин")]),
        border: "#ffffff",
        fill: "#009452",
    },
    KnownCiv {
        name: Localized::new("Egyptian Empire", &[(Fr, "Empire égyptien"), (De, "Ägyptisches Reich"), (Es, "Imperio Egipcio"), (It, "Impero Egizio"), (Ko, "이집트 제국"), (Pl, "Imperium egipskie")]),
        capital: Localized::new("Thebes", &[(Fr, "Thèbes"), (De, "Theben"), (Es, "Tebas"), (It, "Tebe"), (Ko, "테베"), (Pl, "Teby"), (Ja, "テーベ"), (Ru, "Фивы")]),
        border: "#5200d0",
        fill: "#fffb03",
    },
    KnownCiv {
        name: Localized::new("English Empire", &[(Fr, "Empire anglais"), (De, "Englisches Reich"), (Es, "Imperio Inglés"), (It, "Impero Inglese"), (Ko, "대영 제국"), (Pl, "Imperium angielskie")]),
        capital: Localized::new("London", &[(Fr, "Londres"), (De, "London"), (Es, "Londres"), (It, "Londra"), (Ko, "런던"), (Pl, "Londyn"), (Ja, "ロンドン"), (Ru, "Лондон")]),
        border: "#ffffff",
        fill: "#6c0200",
    },
    KnownCiv {
        name: Localized::new("French Empire", &[(Fr, "Empire français"), (De, "Französisches Reich"), (Es, "Imperio Francés"), (It, "Impero Francese"), (Ko, "프랑스 제국"), (Pl, "Imperium francuskie"), (Ru, "Франция")]),
        capital: Localized::new("Paris", &[(Fr, "Paris"), (De, "Paris"), (Es, "París"), (It, "Parigi"), (Ko, "파리"), (Pl, "Paryż"), (Ja, "パリ"), (Ru, "Париж")]),
        border: "#ebeb8a",
        fill: "#418dfd",
    },
    KnownCiv {
        name: Localized::new("German Empire", &[(Fr, "Empire allemand"), (De, "Deutsches Reich"), (Es, "Imperio Alemán"), (It, "Impero Tedesco"), (Ko, "독일 제국"), (Pl, "Cesarstwo niemieckie")]),
        capital: Localized::new("Berlin", &[(Fr, "Berlin"), (De, "Berlin"), (Es, "Berlín"), (It, "Berlino"), (Ko, "베를린"), (Pl, "Berlin"), (Ja, "ベルリン"), (Ru, "Берлин")]),
        border: "#242b20",
        fill: "#b3b1b8",
    },
    KnownCiv {
        name: Localized::new("Greek Empire", &[(Fr, "Empire grec"), (De, "Griechisches Reich"), (Es, "Imperio Griego"), (It, "Impero Greco"), (Ko, "그리스 제국"), (Pl, "Imperium greckie"), (Ru, "Греция")]),
        capital: Localized::new("Athens", &[(Fr, "Athènes"), (De, "Athen"), (Es, "Atenas"), (It, "Atene"), (Ko, "아테네"), (Pl, "Ateny"), (Ja, "アテネ"), (Ru, "Афины")]),
        border: "#418dfd",
        fill: "#ffffff",
    },
    KnownCiv {
        name: Localized::new("Indian Empire", &[(Fr, "Empire indien"), (De, "Indisches Reich"), (Es, "Imperio Indio"), (It, "Impero Indiano"), (Ko, "인도 제국"), (Pl, "Imperium indyjskie")]),
        capital: Localized::new("Delhi", &[(Fr, "Delhi"), (De, "Delhi"), (Es, "Delhi"), (It, "Delhi"), (Ko, "델리"), (Pl, "Delhi"), (Ja, "デリー"), (Ru, "Дели")]),
        border: "#ff9931",
        fill: "#128706",
    },
    KnownCiv {
        name: Localized::new("Iroquois Empire", &[(Fr, "Empire iroquois"), (De, "Irokesisches Reich"), (Es, "Imperio Iroqués"), (It, "Impero Irochese"), (Ko, "이로쿼이 제국"), (Pl, "Imperium Irokeskie"), (Ru, "Империя ирокезов")]),
        capital: Localized::new("Onondaga", &[(Fr, "Onondaga"), (De, "Onondaga"), (Es, "Onondaga"), (It, "Onondaga"), (Ko, "오논다가"), (Pl, "Onondaga"), (Ja, "オノンダガ"), (Ru, "Онондага")]),
        border: "#fbc981",
        fill: "#415656",
    },
    KnownCiv {
        name: Localized::new("Japanese Empire", &[(Fr, "Empire japonais"), (De, "Japanisches Reich"), (Es, "Imperio Japonés"), (It, "Impero Giapponese"), (Ko, "일본 제국"), (Pl, "Cesarstwo japońskie"), (Ja, "日本文明")]),
        capital: Localized::new("Kyoto", &[(Fr, "Kyoto"), (De, "Kyoto"), (Es, "Kioto"), (It, "Kyoto"), (Ko, "교토"), (Pl, "Kioto"), (Ja, "京都"), (Ru, "Киото")]),
        border: "#b80000",
        fill: "#ffffff",
    },
    KnownCiv {
        name: Localized::new("Ottoman Empire", &[(Fr, "Empire ottoman"), (De, "Osmanisches Reich"), (Es, "Imperio Otomano"), (It, "Impero Ottomano"), (Ko, "오스만 제국"), (Pl, "Imperium Osmańskie")]),
        capital: Localized::new("Istanbul", &[(Fr, "Istanbul"), (De, "Istanbul"), (Es, "Estambul"), (It, "Istanbul"), (Ko, "이스탄불"), (Pl, "Stambuł"), (Ja, "イスタンブール"), (Ru, "Стамбул")]),
        border: "#12521e",
        fill: "#f7f8c7",
    },
    KnownCiv {
        name: Localized::new("Persian Empire", &[(Fr, "Empire perse"), (De, "Persisches Reich"), (Es, "Imperio Persa"), (It, "Impero Persiano"), (Ko, "페르시아 제국"), (Pl, "Imperium perskie")]),
        capital: Localized::new("Persepolis", &[(Fr, "Persépolis"), (De, "Persepolis"), (Es, "Persépolis"), (It, "Persepoli"), (Ko, "페르세폴리스"), (Pl, "Persepolis"), (Ja, "ペルセポリス"), (Ru, "Персеполис")]),
        border: "#f5e637",
        fill: "#b00703",
    },
    KnownCiv {
        name: Localized::new("Roman Empire", &[(Fr, "Empire romain"), (De, "Römisches Reich"), (Es, "Imperio Romano"), (It, "Impero Romano"), (Ko, "로마 제국"), (Pl, "Imperium rzymskie")]),
        capital: Localized::new("Rome", &[(Fr, "Rome"), (De, "Rom"), (Es, "Roma"), (It, "Roma"), (Ko, "로마"), (Pl, "Rzym"), (Ja, "ローマ"), (Ru, "Рим")]),
        border: "#efc600",
        fill: "#460076",
    },
    KnownCiv {
        name: Localized::new("Russian Empire", &[(Fr, "Empire russe"), (De, "Russisches Reich"), (Es, "Imperio Ruso"), (It, "Impero Russo"), (Ko, "러시아 제국"), (Pl, "Imperium rosyjskie"), (Ru, "Российская империя")]),
        capital: Localized::new("Moscow", &[(Fr, "Moscou"), (De, "Moskau"), (Es, "Moscú"), (It, "Mosca"), (Ko, "모스크바"), (Pl, "Moskwa"), (Ja, "モスクワ"), (Ru, "Москва")]),
        border: "#000000",
        fill: "#eeb400",
    },
    KnownCiv {
        name: Localized::new("Siamese Empire", &[(Fr, "Empire siamois"), (De, "Siamesisches Reich"), (Es, "Imperio Siamés"), (It, "Impero del Siam"), (Ko, "시암 제국"), (Pl, "Imperium syjamskie"), (Ru, "Сиамская империя")]),
        capital: Localized::new("Sukhothai", &[(Fr, "Sukhothaï"), (De, "Sukhothai"), (Es, "Sukhothai"), (It, "Sukhothai"), (Ko, "수고타이"), (Pl, "Sukhothai"), (Ja, "スコータイ"), (Ru, "Сукотай")]),
        border: "#b00703",
        fill: "#f5e637",
    },
    KnownCiv {
        name: Localized::new("Songhai Empire", &[(Fr, "Empire songhaï"), (De, "Songhai-Reich"), (Es, "Imperio de Songhai"), (It, "Impero Songhai"), (Ko, "송가이 제국"), (Pl, "Imperium songhajskie"), (Ru, "Сонгайская империя")]),
        capital: Localized::new("Gao", &[(Fr, "Gao"), (De, "Gao"), (Es, "Gao"), (It, "Gao"), (Ko, "가오"), (Pl, "Gao"), (Ja, "ガオ"), (Ru, "Гао")]),
        border: "#5a0009",
        fill: "#d59113",
    },
    KnownCiv {
        name: Localized::new("Babylonian Empire", &[(Fr, "Empire babylonien"), (De, "Babylonisches Reich"), (Es, "Imperio Babilonio"), (It, "Impero babilonese"), (Ko, "바빌론 제국"), (Pl, "Imperium babilońskie"), (Ja, "バビロニア文明"), (Ru, "Вавилонское царство")]),
        capital: Localized::new("Babylon", &[(Fr, "Babylone"), (De, "Babylon"), (Es, "Babilonia"), (It, "Babilonia"), (Ko, "바빌론"), (Pl, "Babilon"), (Ja, "バビロン"), (Ru, "Вавилон")]),
        border: "#c8f8ff",
        fill: "#2b5161",
    },
    KnownCiv {
        name: Localized::new("Mongolian Empire", &[(Fr, "Empire mongol"), (De, "Mongolisches Reich"), (Es, "Imperio Mongol"), (It, "Impero mongolo"), (Ko, "몽골 제국"), (Pl, "Imperium mongolskie"), (Ja, "モンゴル文明"), (Ru, "Монгольская империя")]),
        capital: Localized::new("Karakorum", &[(Fr, "Karakorum"), (De, "Karakorum"), (Es, "Karakorum"), (It, "Karakorum"), (Ko, "카라코람"), (Pl, "Karakorum"), (Ja, "カラコルム"), (Ru, "Каракорум")]),
        border: "#ff7800",
        fill: "#510008",
    },
    KnownCiv {
        name: Localized::new("Spanish Empire", &[(Fr, "Empire espagnol"), (De, "Spanisches Reich"), (Es, "Imperio Español"), (It, "Impero spagnolo"), (Ko, "스페인 제국"), (Pl, "Imperium hiszpańskie"), (Ja, "スペイン文明"), (Ru, "Испания")]),
        capital: Localized::new("Madrid", &[(Fr, "Madrid"), (De, "Madrid"), (Es, "Madrid"), (It, "Madrid"), (Ko, "마드리드"), (Pl, "Madryt"), (Ja, "マドリッド"), (Ru, "Мадрид")]),
        border: "#f4a8a8",
        fill: "#531a1a",
    },
    KnownCiv {
        name: Localized::new("Incan Empire", &[(Fr, "Empire inca"), (De, "Inkareich"), (Es, "Imperio Inca"), (It, "Impero Inca"), (Ko, "잉카 제국"), (Pl, "Imperium Inków"), (Ja, "インカ文明"), (Ru, "Империя инков")]),
        capital: Localized::new("Cusco", &[(Fr, "Cuzco"), (De, "Cusco"), (Es, "Cuzco"), (It, "Cuzco"), (Ko, "쿠스코"), (Pl, "Cuzco"), (Ja, "クスコ"), (Ru, "Куско")]),
        border: "#069f77",
        fill: "#ffb821",
    },
    KnownCiv {
        name: Localized::new("Polynesian Empire", &[(Fr, "Empire polynésien"), (De, "Polynesisches Reich"), (Es, "Imperio Polinesio"), (It, "Polinesia"), (Ko, "폴리네시아 제국"), (Pl, "Imperium polinezyjskie"), (Ja, "ポリネシア帝国"), (Ru, "Полинезия")]),
        capital: Localized::new("Honolulu", &[(Fr, "Honolulu"), (De, "Honolulu"), (Es, "Honolulú"), (It, "Honolulu"), (Ko, "호놀룰루"), (Pl, "Honolulu"), (Ja, "ホノルル"), (Ru, "Гонолулу")]),
        border: "#ffff4a",
        fill: "#d95800",
    },
    KnownCiv {
        name: Localized::new("Danish Empire", &[(Fr, "Empire danois"), (De, "Dänisches Reich"), (Es, "Imperio Danés"), (It, "Impero Danese"), (Ko, "덴마크 제국"), (Pl, "Imperium Duńskie"), (Ja, "デンマーク帝国"), (Ru, "Дания")]),
        capital: Localized::new("Copenhagen", &[(Fr, "Copenhague"), (De, "Kopenhagen"), (Es, "Copenhague"), (It, "Copenhagen"), (Ko, "코펜하겐"), (Pl, "Kopenhaga"), (Ja, "コペンハーゲン"), (Ru, "Копенгаген")]),
        border: "#efe7b3",
        fill: "#6c2a14",
    },
];

/// Difficulty entry for a header id
pub fn difficulty(id: i32) -> Option<&'static Localized> {
    usize::try_from(id).ok().and_then(|i| DIFFICULTIES.get(i))
}

/// Map size entry for a header id
pub fn map_size(id: i32) -> Option<&'static MapSize> {
    usize::try_from(id).ok().and_then(|i| MAP_SIZES.get(i))
}

/// Victory outcome name for an id
pub fn victory_type(id: i32) -> Option<&'static Localized> {
    VICTORY_TYPES
        .iter()
        .find(|(vt, _)| *vt == id)
        .map(|(_, name)| name)
}

/// Advanced option name for an id
pub fn game_option(id: i32) -> Option<&'static Localized> {
    usize::try_from(id).ok().and_then(|i| GAME_OPTIONS.get(i))
}

/// First known civilization whose capital, in `lang`, is `city`
pub fn civ_by_capital(city: &str, lang: crate::locale::Language) -> Option<&'static KnownCiv> {
    KNOWN_CIVS.iter().find(|civ| civ.capital.get(lang) == city)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;

    #[test]
    fn test_bounds_checked_lookups() {
        assert_eq!(difficulty(7).unwrap().get(Language::En), "Deity");
        assert!(difficulty(8).is_none());
        assert!(difficulty(-1).is_none());
        assert_eq!(map_size(3).unwrap().width, 80);
        assert!(map_size(6).is_none());
        assert_eq!(victory_type(-1).unwrap().get(Language::De), "Niederlage");
        assert!(victory_type(5).is_none());
        assert_eq!(game_option(OPTION_ONE_CITY_CHALLENGE).unwrap().get(Language::En), "One-City Challenge");
    }

    #[test]
    fn test_civ_by_capital_uses_language() {
        let civ = civ_by_capital("Rom", Language::De).unwrap();
        assert_eq!(civ.name.get(Language::En), "Roman Empire");
        assert!(civ_by_capital("Rom", Language::En).is_none());
        assert_eq!(civ_by_capital("Kyoto", Language::En).unwrap().fill, "#ffffff");
    }
}
