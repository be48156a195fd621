//! Fixed texts the bot sends back to users.

use crate::anthropic::CompletionErrorKind;

pub const WELCOME: &str = "👋 Привет! Я бот-помощник по классической гомеопатии.

Я могу помочь тебе:
- Подобрать препарат по симптомам
- Узнать характеристики гомеопатических средств
- Получить информацию о модальностях

📝 Просто опиши симптомы, и я постараюсь помочь.

⚠️ Важно: Я не заменяю консультацию гомеопата!
Для точного назначения обратись к специалисту.

Доступные команды:
/start - это сообщение
/help - помощь
/clear - очистить историю беседы";

pub const HELP: &str = "📚 Как пользоваться ботом:

1️⃣ Опиши симптомы максимально подробно:
   - Физические проявления
   - Эмоциональное состояние
   - Время ухудшения/улучшения
   - Пищевые пристрастия
   - Особенности характера

2️⃣ Примеры запросов:
   • \"Головная боль справа, хуже от движения\"
   • \"Ребенок капризный, понос после сна в 16:00\"
   • \"Кашель сухой ночью, жажда холодной воды\"

3️⃣ Можешь задавать уточняющие вопросы о препаратах

💡 Совет: чем детальнее описание, тем точнее подбор препарата!";

pub const HISTORY_CLEARED: &str = "✅ История беседы очищена. Можешь начать новый запрос.";

const REMOTE_API_ERROR: &str = "❌ Ошибка API: сервис ответов не смог обработать запрос.\n\nПопробуй позже.";
const TRANSPORT_ERROR: &str = "❌ Не удалось связаться с сервисом ответов.\n\nПопробуй еще раз.";
const UNKNOWN_ERROR: &str = "❌ Произошла ошибка.\n\nПопробуй еще раз.";

/// The message shown to a user when their request couldn't be
/// answered. Never includes the underlying diagnostic.
pub fn completion_failed(kind: CompletionErrorKind) -> &'static str {
    match kind {
        CompletionErrorKind::RemoteApi => REMOTE_API_ERROR,
        CompletionErrorKind::Transport => TRANSPORT_ERROR,
        CompletionErrorKind::Unknown => UNKNOWN_ERROR,
    }
}
