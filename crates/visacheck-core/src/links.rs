//! Curated official government visa and embassy URLs.
//!
//! Only verified government sources are listed; destinations without a
//! vetted source carry no entry at all.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;

/// Verified URLs for one destination.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct OfficialLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embassy: Option<String>,
}

/// Link directory keyed by destination code.
#[derive(Debug, Clone, Default)]
pub struct LinkDirectory {
    links: BTreeMap<CountryCode, OfficialLink>,
}

impl LinkDirectory {
    /// The built-in curated directory.
    #[must_use]
    pub fn builtin() -> Self {
        let links = LINK_TABLE
            .iter()
            .filter_map(|&(code, visa_info, embassy)| {
                let code: CountryCode = code.parse().ok()?;
                let link = OfficialLink {
                    visa_info: Some(visa_info.to_string()),
                    embassy: Some(embassy.to_string()),
                };
                Some((code, link))
            })
            .collect();
        Self { links }
    }

    #[must_use]
    pub fn get(&self, code: CountryCode) -> Option<&OfficialLink> {
        self.links.get(&code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CountryCode, &OfficialLink)> {
        self.links.iter().map(|(&code, link)| (code, link))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

const LINK_TABLE: &[(&str, &str, &str)] = &[
    (
        "US",
        "https://travel.state.gov/content/travel/en/us-visas.html",
        "https://www.usembassy.gov/",
    ),
    ("GB", "https://www.gov.uk/check-uk-visa", "https://www.gov.uk/world/embassies"),
    (
        "DE",
        "https://www.auswaertiges-amt.de/en/visa-service",
        "https://www.auswaertiges-amt.de/en/about-us/auslandsvertretungen",
    ),
    (
        "FR",
        "https://france-visas.gouv.fr/en/visa-wizard",
        "https://www.diplomatie.gouv.fr/en/french-foreign-policy/security-disarmament-and-non-proliferation/our-alliances-and-cooperations/",
    ),
    (
        "JP",
        "https://www.mofa.go.jp/j_info/visit/visa/",
        "https://www.mofa.go.jp/about/emb_cons/over/index.html",
    ),
    ("KR", "https://www.visa.go.kr/", "https://www.mofa.go.kr/eng/overseas/list.do"),
    (
        "IN",
        "https://indianvisaonline.gov.in/",
        "https://www.mea.gov.in/indian-missions-abroad.htm",
    ),
    ("CN", "https://en.nia.gov.cn/", "https://www.mfa.gov.cn/eng/wjb_663304/zwjg_665342/"),
    (
        "BR",
        "https://www.gov.br/mre/pt-br/assuntos/portal-consular/vistos",
        "https://www.gov.br/mre/pt-br/assuntos/representacoes/estrangeiras",
    ),
    (
        "AE",
        "https://u.ae/en/information-and-services/visa-and-emirates-id",
        "https://www.mofa.gov.ae/en/missions",
    ),
    (
        "SG",
        "https://www.ica.gov.sg/enter-transit-depart/entering-singapore/visa_requirements",
        "https://www.mfa.gov.sg/Overseas-Mission",
    ),
    ("TH", "https://www.thaievisa.go.th/", "https://www.mfa.go.th/en/page/thai-missions-abroad"),
    (
        "TR",
        "https://www.mfa.gov.tr/visa-information-for-foreigners.en.mfa",
        "https://www.mfa.gov.tr/turkish-representations.en.mfa",
    ),
    (
        "IT",
        "https://vistoperitalia.esteri.it/",
        "https://www.esteri.it/en/ministero/la-rete-diplomatica/",
    ),
    (
        "ES",
        "https://www.exteriores.gob.es/en/ServiciosAlCiudadano/Paginas/Visados.aspx",
        "https://www.exteriores.gob.es/en/EmbajadasConsulados/Paginas/index.aspx",
    ),
    (
        "AU",
        "https://immi.homeaffairs.gov.au/visas/getting-a-visa/visa-finder",
        "https://www.dfat.gov.au/about-us/our-locations/missions",
    ),
    (
        "CA",
        "https://www.canada.ca/en/immigration-refugees-citizenship/services/visit-canada.html",
        "https://www.international.gc.ca/world-monde/country-pays/index.aspx?lang=eng",
    ),
    ("NZ", "https://www.immigration.govt.nz/visas/", "https://www.mfat.govt.nz/en/embassies/"),
    (
        "MY",
        "https://www.imi.gov.my/index.php/en/main-services/visa/",
        "https://www.kln.gov.my/web/guest/malaysian-mission",
    ),
    ("PT", "https://vistos.mne.gov.pt/en/", "https://www.portaldascomunidades.mne.gov.pt/en/"),
    (
        "GR",
        "https://www.mfa.gr/en/services/visas-for-foreigners-traveling-to-greece/",
        "https://www.mfa.gr/en/appendix/greek-missions-abroad/",
    ),
    (
        "MX",
        "https://www.inm.gob.mx/sae/publico/en/solicitud.html",
        "https://directorio.sre.gob.mx/index.php/embajadas-de-mexico-en-el-exterior",
    ),
    (
        "EG",
        "https://visa2egypt.gov.eg/",
        "https://www.mfa.gov.eg/English/EgyptianMissionsAbroad/Pages/default.aspx",
    ),
    (
        "ZA",
        "https://www.dha.gov.za/index.php/immigration-services/types-of-visas",
        "https://www.dirco.gov.za/foreign/sa_abroad/index.htm",
    ),
    (
        "ID",
        "https://evisa.imigrasi.go.id/",
        "https://kemlu.go.id/portal/en/page/3/perwakilan_ri",
    ),
    ("VN", "https://evisa.gov.vn/", "https://www.mofa.gov.vn/en/cn_vakv/"),
    (
        "PH",
        "https://consular.dfa.gov.ph/services/visa/visa-general-info",
        "https://dfa.gov.ph/list-of-philippine-foreign-service-posts",
    ),
    (
        "SA",
        "https://visa.visitsaudi.com/",
        "https://www.mofa.gov.sa/en/KingdomForeignPolicy/SaudiMissionsAbroad/Pages/default.aspx",
    ),
    (
        "QA",
        "https://www.moi.gov.qa/site/english/departments/GeneralPassportDept/index.html",
        "https://www.mofa.gov.qa/en/the-ministry/qatar-embassies",
    ),
    (
        "NL",
        "https://www.netherlandsandyou.nl/travel-and-residence/visas-for-the-netherlands",
        "https://www.netherlandsandyou.nl/your-country-and-the-netherlands",
    ),
    (
        "BE",
        "https://diplomatie.belgium.be/en/travel-belgium/visa-belgium",
        "https://diplomatie.belgium.be/en/embassies-and-consulates",
    ),
    (
        "CH",
        "https://www.ch.ch/en/foreign-nationals-in-switzerland/entry-and-stay-in-switzerland/visas-for-foreign-nationals/",
        "https://www.eda.admin.ch/eda/en/fdfa/representations-and-travel-advice.html",
    ),
    (
        "AT",
        "https://www.bmeia.gv.at/en/travel-stay/entry-and-residence-in-austria/",
        "https://www.bmeia.gv.at/en/embassies-consulates/",
    ),
    (
        "SE",
        "https://www.migrationsverket.se/en/you-want-to-apply/visiting-sweden.html",
        "https://www.swedenabroad.se/en/",
    ),
    (
        "NO",
        "https://www.udi.no/en/want-to-apply/visit-and-holiday/",
        "https://www.norway.no/en/missions/",
    ),
    (
        "DK",
        "https://um.dk/en/travel-and-residence/how-to-apply-for-a-visa",
        "https://um.dk/en/about-us/organisation/danish-missions-abroad",
    ),
    ("FI", "https://um.fi/visa-to-visit-finland", "https://um.fi/embassies-and-consulates-general"),
    ("IE", "https://www.ireland.ie/en/dfa/visas-for-ireland/", "https://www.ireland.ie/en/dfa/embassies/"),
    (
        "PL",
        "https://www.gov.pl/web/diplomacy/visas",
        "https://www.gov.pl/web/diplomacy/polish-missions-abroad",
    ),
    (
        "CZ",
        "https://mzv.gov.cz/jnp/en/information_for_aliens/types_of_visas/index.html",
        "https://mzv.gov.cz/jnp/en/diplomatic_missions/index.html",
    ),
    (
        "HU",
        "https://konzuliszolgalat.kormany.hu/en/visa",
        "https://konzuliszolgalat.kormany.hu/en/hungarian-missions-abroad",
    ),
    ("RO", "https://www.mae.ro/en/node/2035", "https://www.mae.ro/en/node/2011"),
    (
        "HR",
        "https://mvep.gov.hr/services-for-citizens/visas-for-croatia-22444/22444",
        "https://mvep.gov.hr/embassy-and-consulates/diplomatic-missions-and-consular-offices-of-the-republic-of-croatia-abroad/22802",
    ),
    (
        "BG",
        "https://www.mfa.bg/en/services-travel/consular-services/travel-bulgaria/visa-bulgaria",
        "https://www.mfa.bg/en/embassyinfo",
    ),
    (
        "RS",
        "https://www.mfa.gov.rs/en/citizens/travel-serbia/visa-regime",
        "https://www.mfa.gov.rs/en/diplomatic-missions/serbian-diplomatic-missions",
    ),
    ("UA", "https://evisa.mfa.gov.ua/", "https://mfa.gov.ua/en/about-ukraine/diplomatic-missions"),
    ("GE", "https://www.evisa.gov.ge/", "https://mfa.gov.ge/MainNav/Embassies"),
    ("AM", "https://evisa.mfa.am/", "https://www.mfa.am/en/diplomatic-missions"),
    ("AZ", "https://evisa.gov.az/en/", "https://www.mfa.gov.az/en/category/azerbaijani-missions-abroad"),
    (
        "KZ",
        "https://egov.kz/cms/en/articles/for_foreigners/visa_regime_for_foreigners",
        "https://www.gov.kz/memleket/entities/mfa/activities/missions?lang=en",
    ),
    ("UZ", "https://e-visa.gov.uz/", "https://mfa.uz/en/embassy"),
];
