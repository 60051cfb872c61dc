use serde::{Deserialize, Serialize};

/// Filters for a candidate distribution (global insight) lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistributionQuery {
    pub title: Option<String>,
    pub title_synonyms: Vec<String>,
    pub companies: Vec<String>,
    pub industries: Vec<String>,
    pub skills: Vec<String>,
    pub country_code: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub titles_count: u32,
    pub companies_count: u32,
    pub industries_count: u32,
    pub skills_count: u32,
}

/// Career profile used to predict title and skill progression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressionQuery {
    pub title: Option<String>,
    pub similar_titles: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DistributionRequest<'a> {
    title: Option<&'a str>,
    title_synonyms: &'a [String],
    companies: &'a [String],
    industries: &'a [String],
    skills: &'a [String],
    is_similar_titles_stats: bool,
    is_occupations_stats: bool,
    is_companies_stats: bool,
    is_industries_stats: bool,
    is_skills_stats: bool,
    is_total_candidate_count: bool,
    location: LocationFilter<'a>,
    similar_titles_count: u32,
    companies_count: u32,
    industries_count: u32,
    skills_count: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LocationFilter<'a> {
    country_code: Option<&'a str>,
    state_name: Option<&'a str>,
    city_name: Option<&'a str>,
}

impl<'a> From<&'a DistributionQuery> for DistributionRequest<'a> {
    fn from(query: &'a DistributionQuery) -> Self {
        Self {
            title: query.title.as_deref(),
            title_synonyms: &query.title_synonyms,
            companies: &query.companies,
            industries: &query.industries,
            skills: &query.skills,
            is_similar_titles_stats: true,
            is_occupations_stats: false,
            is_companies_stats: true,
            is_industries_stats: true,
            is_skills_stats: true,
            is_total_candidate_count: true,
            location: LocationFilter {
                country_code: query.country_code.as_deref(),
                state_name: query.state.as_deref(),
                city_name: query.city.as_deref(),
            },
            similar_titles_count: query.titles_count,
            companies_count: query.companies_count,
            industries_count: query.industries_count,
            skills_count: query.skills_count,
        }
    }
}

// The progression endpoint expects snake_case keys.
#[derive(Debug, Serialize)]
pub(crate) struct ProgressionRequest<'a> {
    title: Option<&'a str>,
    similar_titles: &'a [String],
    skills: &'a [String],
}

impl<'a> From<&'a ProgressionQuery> for ProgressionRequest<'a> {
    fn from(query: &'a ProgressionQuery) -> Self {
        Self {
            title: query.title.as_deref(),
            similar_titles: &query.similar_titles,
            skills: &query.skills,
        }
    }
}
