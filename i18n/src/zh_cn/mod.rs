// user list page
pub const USERS: &str = r#"
title = 用户
search = 按姓名或邮箱搜索
sort_by = 排序
name = 姓名
email = 邮箱
company = 公司
asc = 升序
desc = 降序
add = 添加用户
actions = 操作
loading = 加载中...
no_result = 暂无数据
added = 用户已添加（仅本地）
updated = 用户已更新（仅本地）
"#;

// user detail page
pub const USER_DETAIL: &str = r#"
email = 邮箱
phone = 电话
website = 网站
address = 地址
company = 公司
back = 返回列表
not_found = 未找到该用户，可能正在加载或已被删除。
"#;

// add/edit user modal
pub const USER_FORM: &str = r#"
add_title = 添加用户
edit_title = 编辑用户
name = 姓名
email = 邮箱
company = 公司
name_placeholder = 张三
email_placeholder = zhangsan@example.com
company_placeholder = 某某公司
name_required = 姓名不能为空
email_required = 邮箱不能为空
email_invalid = 邮箱格式不正确
submit = 添加
update = 更新
cancel = 取消
"#;
