use yew::prelude::*;

/// Headline placeholder shown in the news panel.
struct NewsItem {
    title: &'static str,
    source: &'static str,
}

const NEWS: [NewsItem; 3] = [
    NewsItem {
        title: "OPEC+ Considers Production Cut",
        source: "Reuters",
    },
    NewsItem {
        title: "Middle East Tensions Push Oil Prices",
        source: "Bloomberg",
    },
    NewsItem {
        title: "Energy Transition Impacts Demand",
        source: "IEA",
    },
];

/// Static list of market headlines. Fixed data, no I/O, no state.
#[function_component(NewsList)]
pub fn news_list() -> Html {
    html! {
        <div class="news-list">
            {
                NEWS.iter().map(|item| html! {
                    <article class="news-item">
                        <p><b>{item.title}</b><br/><small>{item.source}</small></p>
                        <hr/>
                    </article>
                }).collect::<Html>()
            }
        </div>
    }
}
