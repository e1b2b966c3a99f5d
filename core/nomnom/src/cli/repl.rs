//! 対話セッションの入出力ループ
//!
//! 1 行 1 コマンド。操作の失敗はその場で表示してループを続ける
//! （自動リトライはせず、ユーザーがもう一度実行する）。
//! 入出力の途絶（EOF・書き込み失敗）だけがループを終える。

use crate::domain::{CategoryFilter, Dish, DishCategory};
use crate::usecase::{AddDishRequest, AiApplied, MenuUseCase};
use common::domain::DishId;
use common::error::Error;
use std::io::{BufRead, Write};
use std::path::Path;

const AI_HICCUP: &str = "AI 好像开小差了，请检查 API Key 或稍后再试～";

/// セッションを回す。EOF か quit で正常終了（終了コード 0）。
pub fn run_session<R: BufRead, W: Write>(
    uc: &mut MenuUseCase,
    mut input: R,
    mut out: W,
) -> Result<i32, Error> {
    writeln!(out, "家味小厨 🥢  今天吃点什么好呢？")?;
    writeln!(out, "输入 help 查看命令，quit 退出")?;
    if !uc.ai_available() {
        writeln!(out, "(未设置 GEMINI_API_KEY，「AI 帮我想」已停用)")?;
    }

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (&command, rest) = match tokens.split_first() {
            Some(split) => split,
            None => continue,
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_session_help(&mut out)?,
            "list" => render_list(uc, &mut out)?,
            "filter" => handle_filter(uc, rest, &mut out)?,
            "add" => handle_add(uc, rest, &mut out)?,
            "rm" => handle_rm(uc, rest, &mut out)?,
            "pick" => handle_pick(uc, rest, &mut out)?,
            "picked" => render_picked(uc, &mut out)?,
            "clear" => {
                uc.clear_selection();
                writeln!(out, "已清空今日菜单")?;
            }
            "photo" => handle_photo(uc, rest, &mut out)?,
            "send" => handle_send(uc, &mut out)?,
            _ => writeln!(out, "不认识的命令: {}（输入 help 查看用法）", command)?,
        }
    }
    Ok(0)
}

fn print_session_help<W: Write>(out: &mut W) -> Result<(), Error> {
    writeln!(out, "命令:")?;
    writeln!(out, "  list                     按当前分类列出菜品")?;
    writeln!(out, "  filter <分类|全部>        切换分类（荤菜 素菜 汤羹 主食 小吃）")?;
    writeln!(out, "  add [--ai] <菜名> [分类] [描述]   添加菜品（--ai 让 AI 填写描述）")?;
    writeln!(out, "  photo <编号> <文件>       给菜品加照片（小于 2MB）")?;
    writeln!(out, "  rm <编号>                下架菜品")?;
    writeln!(out, "  pick <编号>              选入 / 移出今日菜单")?;
    writeln!(out, "  picked                   查看今日菜单")?;
    writeln!(out, "  clear                    清空今日菜单")?;
    writeln!(out, "  send                     复制菜单并通知大厨")?;
    writeln!(out, "  quit                     退出")?;
    Ok(())
}

fn render_list<W: Write>(uc: &MenuUseCase, out: &mut W) -> Result<(), Error> {
    let dishes = uc.dishes_in_view();
    if dishes.is_empty() {
        writeln!(out, "这个分类下还没菜呢 🥡")?;
        return Ok(());
    }
    writeln!(out, "分类: {}（共 {} 道）", uc.filter().label(), dishes.len())?;
    for (index, dish) in dishes.iter().enumerate() {
        let mark = if uc.selection().contains(&dish.id) {
            "✓"
        } else {
            " "
        };
        writeln!(
            out,
            "{} {}. {} {} [{}] {}",
            mark,
            index + 1,
            dish.name,
            dish_icon(dish),
            dish.category,
            dish.description
        )?;
    }
    if !uc.selection().is_empty() {
        writeln!(out, "已选 {} 道菜", uc.selection().len())?;
    }
    Ok(())
}

/// 写真があれば 📷、無ければ絵文字（テキスト出力では常に絵文字を使うのと違い、
/// 一覧では写真持ちであることが分かるようにする）
fn dish_icon(dish: &Dish) -> &str {
    if dish.image_url.is_some() {
        "📷"
    } else {
        &dish.emoji
    }
}

fn handle_filter<W: Write>(uc: &mut MenuUseCase, rest: &[&str], out: &mut W) -> Result<(), Error> {
    let label = match rest.first() {
        None => {
            writeln!(out, "当前分类: {}（可选: 全部 荤菜 素菜 汤羹 主食 小吃）", uc.filter().label())?;
            return Ok(());
        }
        Some(l) => *l,
    };
    match CategoryFilter::parse(label) {
        Some(filter) => {
            uc.set_filter(filter);
            render_list(uc, out)?;
        }
        None => writeln!(out, "没有这个分类: {}", label)?,
    }
    Ok(())
}

fn handle_add<W: Write>(uc: &mut MenuUseCase, rest: &[&str], out: &mut W) -> Result<(), Error> {
    let mut use_ai = false;
    let mut words: Vec<&str> = Vec::new();
    for token in rest {
        if *token == "--ai" {
            use_ai = true;
        } else {
            words.push(*token);
        }
    }
    let name = match words.first() {
        None => {
            writeln!(out, "用法: add [--ai] <菜名> [分类] [描述]")?;
            return Ok(());
        }
        Some(n) => n.to_string(),
    };

    let mut category = None;
    let mut description_start = 1;
    if let Some(second) = words.get(1) {
        if let Some(parsed) = DishCategory::from_label(second) {
            category = Some(parsed);
            description_start = 2;
        }
    }
    let description = if words.len() > description_start {
        Some(words[description_start..].join(" "))
    } else {
        None
    };

    let request = AddDishRequest {
        name,
        category,
        description,
        emoji: None,
        use_ai,
    };
    match uc.add_dish(request) {
        Ok(added) => {
            match added.ai {
                AiApplied::Filled => writeln!(out, "AI 已帮你想好描述啦 ✨")?,
                AiApplied::Unavailable if use_ai => {
                    writeln!(out, "AI 暂时没有灵感，先用默认描述啦")?
                }
                _ => {}
            }
            writeln!(out, "已添加上桌: {}", added.name)?;
        }
        Err(Error::Http(_)) | Err(Error::Json(_)) if use_ai => {
            writeln!(out, "{}", AI_HICCUP)?;
        }
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn handle_rm<W: Write>(uc: &mut MenuUseCase, rest: &[&str], out: &mut W) -> Result<(), Error> {
    let id = match resolve_index(uc, rest.first()) {
        None => {
            writeln!(out, "用法: rm <编号>（list 里的编号）")?;
            return Ok(());
        }
        Some(id) => id,
    };
    let name = uc
        .catalog()
        .get(&id)
        .map(|d| d.name.clone())
        .unwrap_or_default();
    match uc.delete_dish(&id) {
        Ok(true) => writeln!(out, "已下架: {}", name)?,
        Ok(false) => {}
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn handle_pick<W: Write>(uc: &mut MenuUseCase, rest: &[&str], out: &mut W) -> Result<(), Error> {
    let id = match resolve_index(uc, rest.first()) {
        None => {
            writeln!(out, "用法: pick <编号>（list 里的编号）")?;
            return Ok(());
        }
        Some(id) => id,
    };
    let name = uc
        .catalog()
        .get(&id)
        .map(|d| d.name.clone())
        .unwrap_or_default();
    if uc.toggle(id) {
        writeln!(out, "已加入菜单: {}", name)?;
    } else {
        writeln!(out, "已从菜单移除: {}", name)?;
    }
    Ok(())
}

fn render_picked<W: Write>(uc: &MenuUseCase, out: &mut W) -> Result<(), Error> {
    let picked = uc.picked_dishes();
    if picked.is_empty() {
        writeln!(out, "点选菜品加入")?;
        return Ok(());
    }
    writeln!(out, "今日菜单 📜")?;
    for dish in &picked {
        writeln!(out, "- {} {}", dish.name, dish_icon(dish))?;
    }
    writeln!(out, "已选 {} 道菜", picked.len())?;
    Ok(())
}

fn handle_photo<W: Write>(uc: &mut MenuUseCase, rest: &[&str], out: &mut W) -> Result<(), Error> {
    let (index_token, path) = match (rest.first(), rest.get(1)) {
        (Some(i), Some(p)) => (*i, *p),
        _ => {
            writeln!(out, "用法: photo <编号> <文件路径>")?;
            return Ok(());
        }
    };
    let id = match resolve_index(uc, Some(&index_token)) {
        None => {
            writeln!(out, "没有这个编号: {}", index_token)?;
            return Ok(());
        }
        Some(id) => id,
    };
    match uc.attach_photo(&id, Path::new(path)) {
        Ok(()) => writeln!(out, "已加上照片 📷")?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn handle_send<W: Write>(uc: &mut MenuUseCase, out: &mut W) -> Result<(), Error> {
    if uc.selection().is_empty() {
        writeln!(out, "还没有选菜呢，先用 pick 选几道吧")?;
        return Ok(());
    }
    // 通知（コピー成功・失敗）は NoticeSink 経由で表示される
    if let Err(e) = uc.notify_chef() {
        writeln!(out, "{}", e)?;
    }
    Ok(())
}

/// list の番号（1 始まり、現在のフィルタ適用後）を DishId に解決する
fn resolve_index(uc: &MenuUseCase, token: Option<&&str>) -> Option<DishId> {
    let n: usize = token?.parse().ok()?;
    let view = uc.dishes_in_view();
    if n == 0 || n > view.len() {
        return None;
    }
    Some(view[n - 1].id.clone())
}
